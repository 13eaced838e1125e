//! Parser for the line commands accepted by `Session::execute`.
//!
//! A command is `<tree> <operation> [argument]`, separated by whitespace:
//!
//! ```text
//! bst insert 5
//! avl delete 5
//! bt traverse level-order
//! avl balance
//! ```

use crate::error::{Error, Result};
use crate::session::{Request, TreeKind};
use crate::traversal::Traversal;

pub fn parse_command(line: &str) -> Result<(TreeKind, Request<i64>)> {
    let mut tokens = line.split_whitespace();

    let kind = tokens
        .next()
        .ok_or_else(|| Error::Parse("empty command".to_string()))?
        .parse::<TreeKind>()
        .map_err(Error::Parse)?;

    let operation = tokens
        .next()
        .ok_or_else(|| Error::Parse(format!("missing operation for {}", kind)))?;

    let request = match operation {
        "insert" | "add" => Request::Insert(parse_value(tokens.next(), operation)?),
        "delete" | "remove" => Request::Delete(parse_value(tokens.next(), operation)?),
        "search" | "find" => Request::Search(parse_value(tokens.next(), operation)?),
        "min" => Request::Min,
        "max" => Request::Max,
        "height" => Request::Height,
        "traverse" | "traversal" => {
            let order = tokens
                .next()
                .ok_or_else(|| Error::Parse("missing traversal order".to_string()))?;
            Request::Traverse(order.parse::<Traversal>().map_err(Error::Parse)?)
        },
        "visualize" | "show" => Request::Visualize,
        "balance" | "balance-factor" => Request::BalanceFactor,
        _ => return Err(Error::Parse(format!("unknown operation `{}`", operation))),
    };

    if let Some(token) = tokens.next() {
        return Err(Error::Parse(format!("unexpected argument `{}`", token)));
    }

    Ok((kind, request))
}

fn parse_value(token: Option<&str>, operation: &str) -> Result<i64> {
    let token = token.ok_or_else(|| Error::Parse(format!("missing value for {}", operation)))?;
    Ok(token.parse::<i64>()?)
}
