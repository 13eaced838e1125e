//! Traversals shared by every tree in the crate.
//!
//! All of the functions in this module are written against the `BinaryNode` trait, so they work
//! the same way for the unordered binary tree, the binary search tree and the avl tree.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// A node with at most two children that can be walked by the functions in this module.
pub trait BinaryNode {
    type Value;

    fn value(&self) -> &Self::Value;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;
}

/// The order in which a traversal visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
    /// Breadth first, nearest to the root first and left to right within a level.
    LevelOrder,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::PreOrder => "pre-order",
            Traversal::InOrder => "in-order",
            Traversal::PostOrder => "post-order",
            Traversal::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre" | "pre-order" | "preorder" => Ok(Traversal::PreOrder),
            "in" | "in-order" | "inorder" => Ok(Traversal::InOrder),
            "post" | "post-order" | "postorder" => Ok(Traversal::PostOrder),
            "level" | "level-order" | "levelorder" => Ok(Traversal::LevelOrder),
            _ => Err(format!("unknown traversal order `{}`", s)),
        }
    }
}

/// Calls `sink` with the value of every node reachable from `root` in the given order.
pub fn visit<'a, N, F>(root: Option<&'a N>, order: Traversal, mut sink: F)
where
    N: BinaryNode,
    F: FnMut(&'a N::Value),
{
    match order {
        Traversal::PreOrder => pre_order(root, &mut sink),
        Traversal::InOrder => {
            for value in Iter::new(root) {
                sink(value);
            }
        },
        Traversal::PostOrder => post_order(root, &mut sink),
        Traversal::LevelOrder => level_order(root, &mut sink),
    }
}

/// Returns the values of every node reachable from `root` in the given order.
pub fn collect<N>(root: Option<&N>, order: Traversal) -> Vec<&N::Value>
where
    N: BinaryNode,
{
    let mut ret = Vec::new();
    visit(root, order, |value| ret.push(value));
    ret
}

fn pre_order<'a, N, F>(root: Option<&'a N>, sink: &mut F)
where
    N: BinaryNode,
    F: FnMut(&'a N::Value),
{
    let mut stack: Vec<&'a N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        sink(node.value());
        // right is pushed first so that the left subtree is popped first
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn post_order<'a, N, F>(root: Option<&'a N>, sink: &mut F)
where
    N: BinaryNode,
    F: FnMut(&'a N::Value),
{
    // node, right, left reversed is left, right, node
    let mut stack: Vec<&'a N> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    for node in reversed.into_iter().rev() {
        sink(node.value());
    }
}

fn level_order<'a, N, F>(root: Option<&'a N>, sink: &mut F)
where
    N: BinaryNode,
    F: FnMut(&'a N::Value),
{
    let mut queue: VecDeque<&'a N> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        sink(node.value());
        queue.extend(node.left());
        queue.extend(node.right());
    }
}

/// Returns the number of edges on the longest path from `root` to a leaf. An empty tree has a
/// height of `-1` and a tree with a single node has a height of `0`.
pub fn height<N>(root: Option<&N>) -> i32
where
    N: BinaryNode,
{
    match root {
        None => -1,
        Some(node) => 1 + height(node.left()).max(height(node.right())),
    }
}

/// An iterator that yields the values of a tree using in-order traversal.
///
/// The iterator keeps an explicit stack of the nodes whose left subtrees are being visited, so it
/// never holds more than `height + 1` nodes.
pub struct Iter<'a, N>
where
    N: 'a,
{
    stack: Vec<&'a N>,
}

impl<'a, N> Iter<'a, N>
where
    N: 'a + BinaryNode,
{
    pub fn new(root: Option<&'a N>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<&'a N>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left();
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: 'a + BinaryNode,
{
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
