use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Returns the cached height of a subtree: 0 for an empty subtree and 1 for a leaf.
pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

/// Returns the height of the left subtree minus the height of the right subtree, or 0 for an
/// empty subtree.
pub fn balance<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Rebalances a node whose subtrees were just changed by an insertion. `path` is how the inserted
// value compared against the root of the subtree it was inserted into.
fn balance_insert<T>(mut node: Box<Node<T>>, path: Ordering) -> Box<Node<T>> {
    node.update();

    let balance = node.balance();
    if balance > 1 {
        if path == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if balance < -1 {
        if path == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }
    node
}

// Rebalances a node whose subtrees were just changed by a removal. There is no inserted value to
// follow, so the shape is decided by the balance of the heavier child.
fn balance_remove<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Returns how `value` compared against the root of `tree`, `Equal` when it became the root, or
// `None` if it already exists.
fn insert_at<T>(tree: &mut Tree<T>, value: T) -> Option<Ordering>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return Some(Ordering::Equal);
        },
    };

    let ordering = value.cmp(&node.value);
    let path = match ordering {
        Ordering::Less => insert_at(&mut node.left, value),
        Ordering::Greater => insert_at(&mut node.right, value),
        Ordering::Equal => None,
    };

    *tree = Some(match path {
        Some(path) => balance_insert(node, path),
        None => node,
    });
    path.map(|_| ordering)
}

/// Inserts `value` into the tree and restores the balance of every node on the path back to the
/// root. Returns `false` and leaves the tree untouched if the value already exists.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    insert_at(tree, value).is_some()
}

// precondition: `tree` is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance_remove(tree);
            return ret;
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
/// A node with two children takes the value of its in-order successor, whose node is unlinked
/// from the right subtree instead. Every node on the path back to the root is rebalanced since a
/// removal may shorten the tree at any level.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = remove_min(&mut node.right);
                    let ret = mem::replace(&mut node.value, successor);
                    *tree = Some(node);
                    Some(ret)
                } else {
                    let Node { value, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(value)
                }
            },
        },
        None => return None,
    };

    balance_remove(tree);
    ret
}

/// Removes `value` from the subtree rooted at `tree` and returns the new root of the subtree.
pub fn delete<T>(mut tree: Tree<T>, value: &T) -> Tree<T>
where
    T: Ord,
{
    remove(&mut tree, value);
    tree
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    match tree {
        None => false,
        Some(node) => match value.cmp(&node.value) {
            Ordering::Less => contains(&node.left, value),
            Ordering::Greater => contains(&node.right, value),
            Ordering::Equal => true,
        },
    }
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
    use super::{balance, delete, height, insert, remove, rotate_left, rotate_right, Tree};
    use crate::avl_tree::node::Node;
    use rand::Rng;
    use std::cmp;

    // Recomputes the height of every node from scratch and checks it against the cached value and
    // the balance condition. Returns the recomputed height.
    fn check(tree: &Tree<u32>) -> usize {
        match tree {
            None => 0,
            Some(node) => {
                let left = check(&node.left);
                let right = check(&node.right);
                assert_eq!(node.height, cmp::max(left, right) + 1);
                assert!((left as i32 - right as i32).abs() <= 1);
                if let Some(ref child) = node.left {
                    assert!(child.value < node.value);
                }
                if let Some(ref child) = node.right {
                    assert!(child.value > node.value);
                }
                node.height
            },
        }
    }

    fn value(tree: &Tree<u32>) -> Option<u32> {
        tree.as_ref().map(|node| node.value)
    }

    fn build(values: &[u32]) -> Tree<u32> {
        let mut tree = None;
        for value in values {
            insert(&mut tree, *value);
            check(&tree);
        }
        tree
    }

    #[test]
    fn test_height_and_balance_empty() {
        assert_eq!(height::<u32>(&None), 0);
        assert_eq!(balance::<u32>(&None), 0);
    }

    #[test]
    fn test_rotations() {
        let mut root = Box::new(Node::new(1));
        root.right = Some(Box::new(Node::new(2)));
        root.update();

        let root = rotate_left(root);
        assert_eq!(root.value, 2);
        assert_eq!(root.height, 2);
        assert_eq!(value(&root.left), Some(1));
        assert_eq!(height(&root.left), 1);

        let root = rotate_right(root);
        assert_eq!(root.value, 1);
        assert_eq!(value(&root.right), Some(2));
    }

    #[test]
    fn test_insert_right_right() {
        let tree = build(&[10, 20, 30]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 20);
        assert_eq!(value(&root.left), Some(10));
        assert_eq!(value(&root.right), Some(30));
        assert_eq!(root.balance(), 0);
        assert_eq!(balance(&root.left), 0);
        assert_eq!(balance(&root.right), 0);
    }

    #[test]
    fn test_insert_left_left() {
        let tree = build(&[30, 20, 10]);
        assert_eq!(value(&tree), Some(20));
    }

    #[test]
    fn test_insert_left_right() {
        let tree = build(&[30, 10, 20]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 20);
        assert_eq!(value(&root.left), Some(10));
        assert_eq!(value(&root.right), Some(30));
    }

    #[test]
    fn test_insert_right_left() {
        let tree = build(&[10, 30, 20]);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 20);
        assert_eq!(value(&root.left), Some(10));
        assert_eq!(value(&root.right), Some(30));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1, 3]);
        assert!(!insert(&mut tree, 3));
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_remove_rebalances() {
        //     20
        //    /  \
        //  10    30
        //          \
        //           40
        let mut tree = build(&[20, 10, 30, 40]);
        assert_eq!(remove(&mut tree, &10), Some(10));
        check(&tree);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 30);
        assert_eq!(value(&root.left), Some(20));
        assert_eq!(value(&root.right), Some(40));
    }

    #[test]
    fn test_remove_double_rotation() {
        //     20
        //    /  \
        //  10    30
        //    \
        //     15
        let mut tree = build(&[20, 10, 30, 15]);
        assert_eq!(remove(&mut tree, &30), Some(30));
        check(&tree);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 15);
        assert_eq!(value(&root.left), Some(10));
        assert_eq!(value(&root.right), Some(20));
    }

    #[test]
    fn test_remove_two_children_uses_successor() {
        let mut tree = build(&[20, 10, 30]);
        assert_eq!(remove(&mut tree, &20), Some(20));
        check(&tree);
        let root = tree.as_ref().unwrap();
        assert_eq!(root.value, 30);
        assert_eq!(value(&root.left), Some(10));
        assert!(root.right.is_none());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(remove(&mut tree, &4), None);
        assert_eq!(check(&tree), 2);
    }

    #[test]
    fn test_delete_returns_new_root() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        let tree = delete(delete(delete(tree, &1), &2), &3);
        check(&tree);
        assert_eq!(value(&tree), Some(6));
    }

    #[test]
    fn test_remove_rebalances_every_level() {
        // removing 12 unbalances 11 and then the root, so two levels rotate
        let mut tree = build(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
        assert_eq!(height(&tree), 5);
        assert_eq!(remove(&mut tree, &12), Some(12));
        assert_eq!(check(&tree), 4);
    }

    #[test]
    fn test_random_operations_keep_invariants() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut tree = None;
        for _ in 0..2_000 {
            let key = rng.gen_range(0, 500);
            if rng.gen::<bool>() {
                insert(&mut tree, key);
            } else {
                remove(&mut tree, &key);
            }
            check(&tree);
        }
    }
}
