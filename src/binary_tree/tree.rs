use crate::binary_tree::node::Node;
use std::collections::VecDeque;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Attaches `value` to the first free child slot of a tree holding `len` nodes, scanning breadth
/// first and checking the left slot of a node before its right slot.
///
/// If `len` does not match the tree, the value is attached at the first free slot met on the way
/// down to slot `len + 1`. If that slot is taken, the value goes below the leftmost node of the
/// subtree found there. No existing node is replaced.
pub fn insert<T>(tree: &mut Tree<T>, len: usize, value: T) {
    // Numbering the slots from 1 in breadth-first order, the bits of `len + 1` after its leading
    // one spell out the path from the root: 0 goes left and 1 goes right.
    let slot = len + 1;
    let depth = usize::BITS - 1 - slot.leading_zeros();

    let mut curr = tree;
    for shift in (0..depth).rev() {
        if curr.is_none() {
            break;
        }
        curr = match curr {
            Some(node) => {
                if (slot >> shift) & 1 == 0 {
                    &mut node.left
                } else {
                    &mut node.right
                }
            },
            None => unreachable!(),
        };
    }
    while let Some(node) = curr {
        curr = &mut node.left;
    }
    *curr = Some(Box::new(Node::new(value)));
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: PartialEq,
{
    let mut queue: VecDeque<&Node<T>> = tree.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        if node.value == *value {
            return true;
        }
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{contains, insert, Tree};
    use crate::traversal::{self, Traversal};

    fn len(tree: &Tree<u32>) -> usize {
        match tree {
            None => 0,
            Some(node) => 1 + len(&node.left) + len(&node.right),
        }
    }

    fn build(values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for (i, value) in values.iter().enumerate() {
            insert(&mut tree, i, *value);
        }
        tree
    }

    #[test]
    fn test_insert_root() {
        let tree = build(&[7]);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(7));
        assert!(tree.as_ref().map_or(false, |node| node.is_leaf()));
    }

    #[test]
    fn test_insert_fills_levels_left_to_right() {
        let tree = build(&[10, 20, 30, 40, 50]);
        let root = tree.as_deref().unwrap();
        let left = root.left.as_deref().unwrap();
        let right = root.right.as_deref().unwrap();

        assert_eq!(root.value, 10);
        assert_eq!(left.value, 20);
        assert_eq!(right.value, 30);
        assert_eq!(left.left.as_ref().map(|node| node.value), Some(40));
        assert_eq!(left.right.as_ref().map(|node| node.value), Some(50));
        assert!(right.is_leaf());
    }

    #[test]
    fn test_insert_matches_level_order() {
        let values: Vec<u32> = (0..100).collect();
        let tree = build(&values);
        assert_eq!(
            traversal::collect(tree.as_deref(), Traversal::LevelOrder),
            values.iter().collect::<Vec<&u32>>(),
        );
    }

    #[test]
    fn test_len() {
        assert_eq!(len(&build(&[])), 0);
        assert_eq!(len(&build(&[1, 2, 3, 4, 5, 6, 7, 8])), 8);
    }

    #[test]
    fn test_insert_with_wrong_len() {
        let mut tree = None;
        insert(&mut tree, 5, 1);
        assert_eq!(tree.as_ref().map(|node| node.value), Some(1));

        // slot 7 is reached through the right child of the root, which does not exist yet
        insert(&mut tree, 6, 2);
        let root = tree.as_deref().unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|node| node.value), Some(2));
        assert_eq!(len(&tree), 2);

        // slot 1 is the root, so the value goes below the leftmost node
        insert(&mut tree, 0, 3);
        assert_eq!(len(&tree), 3);
        assert_eq!(
            traversal::collect(tree.as_deref(), Traversal::PreOrder),
            vec![&1, &3, &2],
        );
    }

    #[test]
    fn test_contains() {
        let tree = build(&[3, 1, 4, 1, 5]);
        assert!(contains(&tree, &5));
        assert!(contains(&tree, &1));
        assert!(!contains(&tree, &2));
        assert!(!contains(&None, &2));
    }
}
