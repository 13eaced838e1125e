//! Binary search tree without any balancing.
//!
//! Values in the left subtree of a node are smaller than the node's value and values in the right
//! subtree are larger. Nodes are shared with `binary_tree`.

mod set;
pub mod tree;

pub use self::set::BinarySearchTree;
