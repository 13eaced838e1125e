use crate::binary_tree::node::Node;
use crate::binary_tree::tree;
use crate::traversal::{self, Iter, Traversal};
use crate::visualize;
use std::fmt::Display;
use std::iter::FromIterator;

/// A binary tree whose values are placed in breadth-first order.
///
/// Every insertion fills the first free child slot when the tree is scanned level by level from
/// left to right, so the tree is always complete: no level is started before the previous one is
/// full and no node has a right child without a left child. Values are not ordered and duplicates
/// are kept.
///
/// # Examples
/// ```
/// use binary_trees::binary_tree::BinaryTree;
///
/// let mut tree = BinaryTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.pre_order(), vec![&10, &20, &30]);
/// assert_eq!(tree.in_order(), vec![&20, &10, &30]);
/// ```
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> BinaryTree<T> {
    /// Constructs a new, empty `BinaryTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::binary_tree::BinaryTree;
    ///
    /// let tree: BinaryTree<u32> = BinaryTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        BinaryTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value at the first free slot in breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let BinaryTree { ref mut root, ref mut len } = self;
        tree::insert(root, *len, value);
        *len += 1;
    }

    /// Checks if a value exists in the tree. Since the tree is unordered, every node may be
    /// visited.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(4);
    /// assert!(tree.contains(&4));
    /// assert!(!tree.contains(&5));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        tree::contains(&self.root, value)
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all values.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the number of edges on the longest path from the root to a leaf: `-1` for an empty
    /// tree and `0` for a tree with a single value.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        traversal::height(self.root())
    }

    /// Returns the values of the tree in the given order.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::binary_tree::BinaryTree;
    /// use binary_trees::traversal::Traversal;
    ///
    /// let tree: BinaryTree<u32> = vec![10, 20, 30, 40, 50].into_iter().collect();
    /// assert_eq!(
    ///     tree.traverse(Traversal::LevelOrder),
    ///     vec![&10, &20, &30, &40, &50],
    /// );
    /// assert_eq!(
    ///     tree.traverse(Traversal::PostOrder),
    ///     vec![&40, &50, &20, &30, &10],
    /// );
    /// ```
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traversal::collect(self.root(), order)
    }

    /// Calls `sink` with every value of the tree in the given order.
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

    /// Returns an iterator over the tree. The iterator will yield values using in-order traversal.
    pub fn iter(&self) -> Iter<'_, Node<T>> {
        Iter::new(self.root())
    }

    /// Renders the shape of the tree with box-drawing connectors, one line per node. See
    /// `visualize::tree_lines`.
    pub fn visualize(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::tree_lines(self.root())
    }

    /// Renders the tree rotated a quarter turn. See `visualize::sideways_lines`.
    pub fn visualize_sideways(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::sideways_lines(self.root())
    }

    /// Renders the tree one level per line. See `visualize::level_lines`.
    pub fn visualize_levels(&self) -> Vec<String>
    where
        T: Display,
    {
        visualize::level_lines(self.root())
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
