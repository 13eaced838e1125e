use crate::binary_tree::{Node, Tree};
use crate::bst::tree;
use crate::traversal::{self, Iter, Traversal};
use crate::visualize;
use std::fmt::Display;
use std::iter::FromIterator;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Every value in the left subtree of a node is less than the node's value and every value in the
/// right subtree is greater. Duplicate values are ignored. The tree is never rebalanced, so its
/// height depends on the order of insertions and is linear in the worst case.
///
/// # Examples
/// ```
/// use binary_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for value in vec![50, 30, 70, 20, 40] {
///     tree.insert(value);
/// }
///
/// assert_eq!(tree.in_order(), vec![&20, &30, &40, &50, &70]);
/// assert_eq!(tree.min(), Some(&20));
/// assert_eq!(tree.max(), Some(&70));
/// assert_eq!(tree.height(), 2);
///
/// assert!(tree.delete(&30));
/// assert!(!tree.search(&30));
/// ```
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `false` if the value already exists, in which case
    /// the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
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
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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
    ///
    /// # Examples
    /// ```
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert!(!tree.search(&0));
    /// assert!(tree.search(&1));
    /// ```
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

impl<T> BinarySearchTree<T> {
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
    pub fn height(&self) -> i32 {
        traversal::height(self.root())
    }

    /// Returns the values of the tree in the given order.
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

    /// Returns an iterator over the tree. The iterator will yield values in ascending order.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, Node<T>> {
        Iter::new(self.root())
    }

    /// Renders the shape of the tree with box-drawing connectors, one line per node.
    ///
    /// # Examples
    /// ```
    /// use binary_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.visualize(), vec!["├── 2", "│   ├── 1", "│   └── 3"]);
    /// ```
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

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
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

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
