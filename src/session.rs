//! Request/response front end holding one tree of each kind.
//!
//! A `Session` plays the part of a server that keeps a single instance of every tree and answers
//! one request at a time. Requests that a kind of tree cannot answer, such as deleting from the
//! unordered binary tree, are rejected before anything is touched.

use crate::avl_tree::AvlTree;
use crate::binary_tree::BinaryTree;
use crate::bst::BinarySearchTree;
use crate::command;
use crate::error::{Error, Result};
use crate::traversal::Traversal;
use log::{debug, warn};
use std::fmt::{self, Debug, Display};
use std::result;
use std::str::FromStr;

/// The kinds of trees held by a `Session`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeKind {
    Binary,
    Search,
    Avl,
}

impl TreeKind {
    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Binary => "binary-tree",
            TreeKind::Search => "binary-search-tree",
            TreeKind::Avl => "avl-tree",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TreeKind {
    type Err = String;

    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "bt" | "binary" | "binary-tree" => Ok(TreeKind::Binary),
            "bst" | "binary-search-tree" => Ok(TreeKind::Search),
            "avl" | "avl-tree" => Ok(TreeKind::Avl),
            _ => Err(format!("unknown tree `{}`", s)),
        }
    }
}

/// A single operation on one tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Request<T> {
    Insert(T),
    Delete(T),
    Search(T),
    Min,
    Max,
    Height,
    Traverse(Traversal),
    Visualize,
    BalanceFactor,
}

impl<T> Request<T> {
    pub fn name(&self) -> &'static str {
        match self {
            Request::Insert(_) => "insert",
            Request::Delete(_) => "delete",
            Request::Search(_) => "search",
            Request::Min => "min",
            Request::Max => "max",
            Request::Height => "height",
            Request::Traverse(_) => "traverse",
            Request::Visualize => "visualize",
            Request::BalanceFactor => "balance factor",
        }
    }
}

/// The answer to a `Request`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Response<T> {
    /// `false` when the value was a duplicate and the tree was left unchanged.
    Inserted(bool),
    /// The value at the root of the tree after a deletion.
    Root(Option<T>),
    Found(bool),
    Value(Option<T>),
    Height(i32),
    Values(Vec<T>),
    Lines(Vec<String>),
    Empty,
    BalanceFactor(Option<i32>),
}

impl<T> Response<T> {
    fn lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Response::Empty
        } else {
            Response::Lines(lines)
        }
    }
}

impl<T> fmt::Display for Response<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Inserted(true) => write!(f, "inserted"),
            Response::Inserted(false) => write!(f, "duplicate ignored"),
            Response::Root(Some(value)) => write!(f, "root: {}", value),
            Response::Root(None) => write!(f, "root: none"),
            Response::Found(found) => write!(f, "found: {}", found),
            Response::Value(Some(value)) => write!(f, "{}", value),
            Response::Value(None) | Response::BalanceFactor(None) => write!(f, "none"),
            Response::Height(height) => write!(f, "height: {}", height),
            Response::Values(values) => {
                let values: Vec<String> = values.iter().map(|value| value.to_string()).collect();
                write!(f, "[{}]", values.join(", "))
            },
            Response::Lines(lines) => write!(f, "{}", lines.join("\n")),
            Response::Empty => write!(f, "tree is empty"),
            Response::BalanceFactor(Some(balance)) => write!(f, "balance factor: {}", balance),
        }
    }
}

/// Holds one unordered binary tree, one binary search tree and one avl tree.
#[derive(Debug)]
pub struct Session<T> {
    binary_tree: BinaryTree<T>,
    search_tree: BinarySearchTree<T>,
    avl_tree: AvlTree<T>,
}

impl<T> Session<T>
where
    T: Clone + Debug + Display + Ord,
{
    pub fn new() -> Self {
        Session {
            binary_tree: BinaryTree::new(),
            search_tree: BinarySearchTree::new(),
            avl_tree: AvlTree::new(),
        }
    }

    pub fn binary_tree(&self) -> &BinaryTree<T> {
        &self.binary_tree
    }

    pub fn search_tree(&self) -> &BinarySearchTree<T> {
        &self.search_tree
    }

    pub fn avl_tree(&self) -> &AvlTree<T> {
        &self.avl_tree
    }

    /// Runs `request` against the tree of the given kind.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::session::{Request, Response, Session, TreeKind};
    ///
    /// let mut session = Session::new();
    /// for value in vec![10, 20, 30] {
    ///     session.handle(TreeKind::Avl, Request::Insert(value)).unwrap();
    /// }
    /// assert_eq!(
    ///     session.handle(TreeKind::Avl, Request::BalanceFactor).unwrap(),
    ///     Response::BalanceFactor(Some(0)),
    /// );
    /// assert!(session.handle(TreeKind::Search, Request::BalanceFactor).is_err());
    /// ```
    pub fn handle(&mut self, kind: TreeKind, request: Request<T>) -> Result<Response<T>> {
        debug!("{} {:?}", kind, request);
        let ret = match kind {
            TreeKind::Binary => self.handle_binary(request),
            TreeKind::Search => self.handle_search(request),
            TreeKind::Avl => self.handle_avl(request),
        };
        if let Err(ref error) = ret {
            warn!("rejected request: {}", error);
        }
        ret
    }

    fn handle_binary(&mut self, request: Request<T>) -> Result<Response<T>> {
        let tree = &mut self.binary_tree;
        Ok(match request {
            Request::Insert(value) => {
                tree.insert(value);
                Response::Inserted(true)
            },
            Request::Search(value) => Response::Found(tree.contains(&value)),
            Request::Height => Response::Height(tree.height()),
            Request::Traverse(order) => Response::Values(to_owned(tree.traverse(order))),
            Request::Visualize => Response::lines(tree.visualize()),
            request => return Err(unsupported(TreeKind::Binary, &request)),
        })
    }

    fn handle_search(&mut self, request: Request<T>) -> Result<Response<T>> {
        let tree = &mut self.search_tree;
        Ok(match request {
            Request::Insert(value) => Response::Inserted(tree.insert(value)),
            Request::Delete(value) => {
                tree.delete(&value);
                Response::Root(tree.root().map(|node| node.value.clone()))
            },
            Request::Search(value) => Response::Found(tree.search(&value)),
            Request::Min => Response::Value(tree.min().cloned()),
            Request::Max => Response::Value(tree.max().cloned()),
            Request::Height => Response::Height(tree.height()),
            Request::Traverse(order) => Response::Values(to_owned(tree.traverse(order))),
            Request::Visualize => Response::lines(tree.visualize()),
            request => return Err(unsupported(TreeKind::Search, &request)),
        })
    }

    fn handle_avl(&mut self, request: Request<T>) -> Result<Response<T>> {
        let tree = &mut self.avl_tree;
        Ok(match request {
            Request::Insert(value) => Response::Inserted(tree.insert(value)),
            Request::Delete(value) => {
                tree.delete(&value);
                Response::Root(tree.root().map(|node| node.value.clone()))
            },
            Request::Search(value) => Response::Found(tree.search(&value)),
            Request::Min => Response::Value(tree.min().cloned()),
            Request::Max => Response::Value(tree.max().cloned()),
            Request::Height => Response::Height(tree.height()),
            Request::Traverse(order) => Response::Values(to_owned(tree.traverse(order))),
            Request::Visualize => Response::lines(tree.visualize()),
            Request::BalanceFactor => Response::BalanceFactor(tree.balance_factor()),
        })
    }
}

impl<T> Default for Session<T>
where
    T: Clone + Debug + Display + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl Session<i64> {
    /// Parses a command line such as `bst insert 5` and runs it. Malformed lines are rejected
    /// before any tree is touched.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::session::{Response, Session};
    ///
    /// let mut session = Session::new();
    /// session.execute("bst insert 2").unwrap();
    /// session.execute("bst insert 1").unwrap();
    /// assert_eq!(session.execute("bst min").unwrap(), Response::Value(Some(1)));
    /// assert!(session.execute("bst insert two").is_err());
    /// ```
    pub fn execute(&mut self, line: &str) -> Result<Response<i64>> {
        let (kind, request) = command::parse_command(line)?;
        self.handle(kind, request)
    }
}

fn to_owned<T>(values: Vec<&T>) -> Vec<T>
where
    T: Clone,
{
    values.into_iter().cloned().collect()
}

fn unsupported<T>(kind: TreeKind, request: &Request<T>) -> Error {
    Error::Unsupported {
        kind,
        operation: request.name(),
    }
}
