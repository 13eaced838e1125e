use crate::binary_tree::{Node, Tree};
use std::cmp::Ordering;
use std::mem;

/// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if the value
/// already exists.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *curr = Some(Box::new(Node::new(value)));
    true
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

// precondition: `tree` is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(node) = tree {
        if node.left.is_some() {
            return remove_min(&mut node.left);
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { value, right, .. } = *node;
            *tree = right;
            value
        },
        None => unreachable!(),
    }
}

/// Removes `value` from the tree and returns it, or returns `None` if it does not exist.
///
/// A node with at most one child is replaced by that child. A node with two children keeps its
/// place and takes the value of its in-order successor, whose own node is unlinked from the right
/// subtree instead.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;
    let ret = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value),
        Ordering::Greater => remove(&mut node.right, value),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                let successor = remove_min(&mut node.right);
                Some(mem::replace(&mut node.value, successor))
            } else {
                let Node { value, left, right } = *node;
                *tree = left.or(right);
                return Some(value);
            }
        },
    };
    *tree = Some(node);
    ret
}

/// Removes `value` from the subtree rooted at `tree` and returns the new root of the subtree.
///
/// # Examples
/// ```
/// use binary_trees::binary_tree::Node;
/// use binary_trees::bst::tree;
///
/// let mut root = Node::new(20);
/// root.left = Some(Box::new(Node::new(10)));
/// root.right = Some(Box::new(Node::new(30)));
///
/// let root = tree::delete(Some(Box::new(root)), &20).unwrap();
/// assert_eq!(root.value, 30);
/// assert_eq!(root.left.as_ref().map(|node| node.value), Some(10));
/// assert!(root.right.is_none());
/// ```
pub fn delete<T>(mut tree: Tree<T>, value: &T) -> Tree<T>
where
    T: Ord,
{
    remove(&mut tree, value);
    tree
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

#[cfg(test)]
mod tests {
    use super::{contains, delete, insert, max, min, remove, Tree};
    use crate::traversal::{self, Traversal};

    fn build(values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for value in values {
            insert(&mut tree, *value);
        }
        tree
    }

    fn in_order(tree: &Tree<u32>) -> Vec<u32> {
        traversal::collect(tree.as_deref(), Traversal::InOrder)
            .into_iter()
            .cloned()
            .collect()
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!insert(&mut tree, 1));
        assert_eq!(in_order(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[50, 30, 70, 20, 40]);
        assert!(contains(&tree, &40));
        assert!(!contains(&tree, &45));
        assert!(!contains(&None, &45));
    }

    #[test]
    fn test_min_max_subtree() {
        let tree = build(&[50, 30, 70, 20, 40, 60, 80]);
        let right = &tree.as_ref().unwrap().right;
        assert_eq!(min(right), Some(&60));
        assert_eq!(max(right), Some(&80));
        assert_eq!(min::<u32>(&None), None);
        assert_eq!(max::<u32>(&None), None);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &3), Some(3));
        assert_eq!(in_order(&tree), vec![1, 2]);
    }

    #[test]
    fn test_remove_one_child() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(remove(&mut tree, &3), Some(3));
        let root = tree.as_ref().unwrap();
        assert_eq!(root.right.as_ref().map(|node| node.value), Some(4));
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &5), None);
        assert_eq!(in_order(&tree), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = build(&[50, 30, 70, 60, 80, 65]);
        assert_eq!(remove(&mut tree, &50), Some(50));

        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 60);
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.value, 70);
        assert_eq!(right.left.as_ref().map(|node| node.value), Some(65));
        assert_eq!(in_order(&tree), vec![30, 60, 65, 70, 80]);
    }

    #[test]
    fn test_delete_returns_new_root() {
        let tree = build(&[20, 10, 30]);
        let tree = delete(tree, &20);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 30);
        assert_eq!(root.left.as_ref().map(|node| node.value), Some(10));
        assert!(root.right.is_none());

        let tree = delete(delete(tree, &30), &10);
        assert!(tree.is_none());
    }
}
