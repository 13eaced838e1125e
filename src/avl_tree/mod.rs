//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
pub mod tree;

pub use self::node::Node;
pub use self::set::AvlTree;
pub use self::tree::Tree;
