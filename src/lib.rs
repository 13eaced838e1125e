//! Unordered binary trees, binary search trees and avl trees.
//!
//! All three trees share the node walking code in `traversal` and `visualize`, so they expose the
//! same queries: pre-order, in-order, post-order and level-order traversals, the height of the
//! tree and text renderings of its shape. The ordered trees add search, minimum, maximum and
//! deletion, and the avl tree keeps itself balanced.
//!
//! `session` wraps one tree of each kind behind a small request/response interface.

#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
pub mod binary_tree;
pub mod bst;
pub mod command;
mod error;
pub mod session;
pub mod traversal;
pub mod visualize;

pub use crate::error::{Error, Result};
