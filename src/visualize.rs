//! Text renderings of the shape of a tree.

use crate::traversal::BinaryNode;
use std::collections::VecDeque;
use std::fmt::Display;

const LEFT_BRANCH: &str = "├── ";
const RIGHT_BRANCH: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";
const SIDEWAYS_INDENT: usize = 5;
const CELL_WIDTH: usize = 3;
// the widest gap between two cells is 2^6 columns
const MAX_GAP_SHIFT: u32 = 6;

/// Renders a tree as one line per node, each prefixed with box-drawing connectors.
///
/// A node's line is followed by the lines of its left subtree and then its right subtree. Left
/// children (and the root) are drawn with `├── ` and keep a `│   ` column open for their own
/// children, right children are drawn with `└── `. An empty tree renders as no lines.
///
/// ```text
/// ├── 50
/// │   ├── 30
/// │   │   ├── 20
/// │   │   └── 40
/// │   └── 70
/// ```
pub fn tree_lines<N>(root: Option<&N>) -> Vec<String>
where
    N: BinaryNode,
    N::Value: Display,
{
    let mut lines = Vec::new();
    if let Some(node) = root {
        push_tree_lines(node, "", true, &mut lines);
    }
    lines
}

fn push_tree_lines<N>(node: &N, prefix: &str, is_left: bool, lines: &mut Vec<String>)
where
    N: BinaryNode,
    N::Value: Display,
{
    let (connector, extension) = if is_left {
        (LEFT_BRANCH, CONTINUATION)
    } else {
        (RIGHT_BRANCH, BLANK)
    };
    lines.push(format!("{}{}{}", prefix, connector, node.value()));

    let child_prefix = format!("{}{}", prefix, extension);
    if let Some(left) = node.left() {
        push_tree_lines(left, &child_prefix, true, lines);
    }
    if let Some(right) = node.right() {
        push_tree_lines(right, &child_prefix, false, lines);
    }
}

/// Renders a tree rotated a quarter turn counter-clockwise: the right subtree comes first and
/// every level is indented five columns further than its parent.
pub fn sideways_lines<N>(root: Option<&N>) -> Vec<String>
where
    N: BinaryNode,
    N::Value: Display,
{
    let mut lines = Vec::new();
    push_sideways_lines(root, 0, &mut lines);
    lines
}

fn push_sideways_lines<N>(node: Option<&N>, depth: usize, lines: &mut Vec<String>)
where
    N: BinaryNode,
    N::Value: Display,
{
    if let Some(node) = node {
        push_sideways_lines(node.right(), depth + 1, lines);
        lines.push(format!("{}{}", " ".repeat(depth * SIDEWAYS_INDENT), node.value()));
        push_sideways_lines(node.left(), depth + 1, lines);
    }
}

/// Renders a tree one level per line. Each value is right-aligned in three columns, missing
/// children are left blank, and the gap between cells halves at every level.
///
/// The gap at level `i` of a tree with `d` levels is `2^(d - i + 1)` columns, capped at 64 so that
/// deep trees still render in bounded width. Only the children of present nodes get a cell, so
/// the number of cells is linear in the size of the tree.
pub fn level_lines<N>(root: Option<&N>) -> Vec<String>
where
    N: BinaryNode,
    N::Value: Display,
{
    let mut levels: Vec<Vec<Option<String>>> = Vec::new();
    let mut queue: VecDeque<(Option<&N>, usize)> = VecDeque::new();
    if root.is_some() {
        queue.push_back((root, 0));
    }

    while let Some((node, level)) = queue.pop_front() {
        if levels.len() == level {
            levels.push(Vec::new());
        }
        levels[level].push(node.map(|node| node.value().to_string()));
        if let Some(node) = node {
            queue.push_back((node.left(), level + 1));
            queue.push_back((node.right(), level + 1));
        }
    }

    // the last level only holds the missing children of the leaves
    levels.pop();

    let depth = levels.len() as u32;
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let shift = (depth - i as u32 + 1).min(MAX_GAP_SHIFT);
            let gap = " ".repeat(1 << shift);
            level
                .iter()
                .map(|cell| match cell {
                    Some(value) => format!("{:>width$}", value, width = CELL_WIDTH),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect::<Vec<String>>()
                .join(&gap)
        })
        .collect()
}
