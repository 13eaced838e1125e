use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::traversal::{self, Iter, Traversal};
use crate::visualize;
use std::fmt::Display;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// restores the invariant with single or double rotations on the way back up to the root, so the
/// height of the tree stays logarithmic in the number of values.
///
/// # Examples
/// ```
/// use binary_trees::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.level_order(), vec![&20, &10, &30]);
/// assert_eq!(tree.balance_factor(), Some(0));
///
/// assert_eq!(tree.remove(&20), Some(20));
/// assert_eq!(tree.remove(&20), None);
/// ```
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`
    ///
    /// # Examples
    /// ```
    /// use binary_trees::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `false` if the value already exists, in which case
    /// the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.search(&1));
    /// assert!(!tree.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the tree. If the value exists in the tree, it will be returned.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, value);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Deletes a value from the tree. Returns `false` if the value did not exist.
    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value).is_some()
    }

    /// Checks if a value exists in the tree.
    pub fn search(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Checks if a value exists in the tree. Same as `search`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }
}

impl<T> AvlTree<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the number of edges on the longest path from the root to a leaf: `-1` for an empty
    /// tree and `0` for a tree with a single value. Read from the height cached at the root.
    pub fn height(&self) -> i32 {
        tree::height(&self.root) as i32 - 1
    }

    /// Returns the balance factor of the root, or `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.balance_factor(), None);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.balance_factor(), Some(1));
    /// ```
    pub fn balance_factor(&self) -> Option<i32> {
        self.root().map(Node::balance)
    }

    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traversal::collect(self.root(), order)
    }

    pub fn traverse_with<'a, F>(&'a self, order: Traversal, sink: F)
    where
        F: FnMut(&'a T),
    {
        traversal::visit(self.root(), order, sink)
    }

    pub fn pre_order(&self) -> Vec<&T> {
        self.traverse(Traversal::PreOrder)
    }

    pub fn in_order(&self) -> Vec<&T> {
        self.traverse(Traversal::InOrder)
    }

    pub fn post_order(&self) -> Vec<&T> {
        self.traverse(Traversal::PostOrder)
    }

    pub fn level_order(&self) -> Vec<&T> {
        self.traverse(Traversal::LevelOrder)
    }

    /// Returns an iterator over the tree. The iterator will yield values in ascending order.
    pub fn iter(&self) -> Iter<'_, Node<T>> {
        Iter::new(self.root())
    }

    pub fn visualize(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::tree_lines(self.root())
    }

    pub fn visualize_sideways(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::sideways_lines(self.root())
    }

    pub fn visualize_levels(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::level_lines(self.root())
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
