//! Binary tree filled level by level, left to right, with no ordering between its values.
//!
//! The node type defined here is also the node type of the binary search tree.

mod node;
pub mod tree;
mod unordered;

pub use self::node::Node;
pub use self::tree::Tree;
pub use self::unordered::BinaryTree;
