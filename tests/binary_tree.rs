use binary_trees::binary_tree::{BinaryTree, Node};
use binary_trees::traversal::Traversal;
use std::collections::VecDeque;

// Walks the tree breadth first and checks that once a free child slot has been seen, no further
// node has children.
fn assert_complete(root: Option<&Node<u32>>) {
    let mut queue: VecDeque<&Node<u32>> = root.into_iter().collect();
    let mut seen_gap = false;
    while let Some(node) = queue.pop_front() {
        for child in vec![node.left.as_deref(), node.right.as_deref()] {
            match child {
                Some(child) => {
                    assert!(!seen_gap);
                    queue.push_back(child);
                },
                None => seen_gap = true,
            }
        }
    }
}

#[test]
fn int_test_scenario() {
    let tree: BinaryTree<u32> = vec![10, 20, 30, 40, 50].into_iter().collect();
    assert_eq!(tree.level_order(), vec![&10, &20, &30, &40, &50]);
    assert_eq!(tree.pre_order(), vec![&10, &20, &40, &50, &30]);
    assert_eq!(tree.height(), 2);
}

#[test]
fn int_test_stays_complete() {
    let mut tree = BinaryTree::new();
    for i in 0..1_000 {
        tree.insert(i);
        assert_complete(tree.root());
    }
    assert_eq!(tree.len(), 1_000);
    assert_eq!(tree.height(), 9);
}

#[test]
fn int_test_level_order_is_insertion_order() {
    let values: Vec<u32> = (0..257).map(|i| (i * 37) % 101).collect();
    let tree: BinaryTree<u32> = values.iter().cloned().collect();
    assert_eq!(
        tree.traverse(Traversal::LevelOrder),
        values.iter().collect::<Vec<&u32>>(),
    );
}

#[test]
fn int_test_traversals_visit_every_value() {
    let tree: BinaryTree<u32> = (0..100).collect();
    for order in Traversal::ALL.iter() {
        let mut values: Vec<u32> = tree.traverse(*order).into_iter().cloned().collect();
        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<u32>>());
    }
}
