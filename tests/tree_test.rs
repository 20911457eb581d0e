//! Tests for tree construction, traversal, and validation

use rstest::rstest;

use rstree::util::testing::init_test_setup;
use rstree::{Node, Order, Strategy, Tree};

fn tree_from(keys: &[i64]) -> Tree {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

// ============================================================
// Insertion Scenarios
// ============================================================

#[test]
fn given_seed_sequence_when_inserted_then_sorted_inorder_depth_and_size() {
    init_test_setup();
    let tree = tree_from(&[5, 7, 3, 9, 1]);

    assert_eq!(tree.keys(Order::In), vec![1, 3, 5, 7, 9]);
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.size(), 5);
}

#[rstest]
#[case(&[1, 2, 3, 4, 5])]
#[case(&[5, 4, 3, 2, 1])]
#[case(&[8, 3, 10, 1, 6, 14, 4, 7, 13])]
#[case(&[42])]
fn given_distinct_keys_when_inserted_then_inorder_strictly_ascending(#[case] keys: &[i64]) {
    let tree = tree_from(keys);
    let inorder = tree.keys(Order::In);

    assert_eq!(inorder.len(), keys.len());
    assert!(inorder.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn given_duplicate_key_when_inserted_then_size_unchanged() {
    let mut tree = tree_from(&[5]);
    tree.insert(5);
    assert_eq!(tree.size(), 1);

    let mut bigger = tree_from(&[5, 7, 3]);
    bigger.insert(7);
    bigger.insert(3);
    assert_eq!(bigger.size(), 3);
}

// ============================================================
// Empty Tree Behavior
// ============================================================

#[test]
fn given_empty_tree_when_queried_then_defined_empty_results() {
    let mut tree = Tree::new();

    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.search(1, Strategy::Breadth), None);
    assert_eq!(tree.search(1, Strategy::Depth), None);
    // deliberate quirk: the empty tree is NOT a valid BST
    assert!(!tree.is_valid());
    assert!(tree.max_sum_path().is_empty());
    assert_eq!(tree.first_common_ancestor(1, 2), None);
    for order in [Order::Pre, Order::In, Order::Post, Order::Level] {
        assert!(tree.keys(order).is_empty());
    }
}

// ============================================================
// Validation
// ============================================================

#[rstest]
#[case(&[5, 7, 3, 9, 1])]
#[case(&[1, 2, 3])]
#[case(&[10])]
fn given_insert_only_history_when_validating_then_valid(#[case] keys: &[i64]) {
    assert!(tree_from(keys).is_valid());
}

#[test]
fn given_hand_built_invalid_shape_when_validating_then_invalid() {
    // bypass insertion: left child larger than its parent
    let mut root = Node::new(5);
    root.left = Some(Box::new(Node::new(8)));
    let tree = Tree::with_root(root);

    assert!(!tree.is_valid());
}

#[test]
fn given_clear_when_called_then_tree_empties() {
    let mut tree = tree_from(&[5, 7, 3]);
    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.depth(), 0);
}

// ============================================================
// Level Order
// ============================================================

#[test]
fn given_seed_tree_when_listing_levels_then_left_to_right_per_level() {
    let tree = tree_from(&[5, 7, 3, 9, 1]);

    assert_eq!(tree.keys_at_level(0), vec![5]);
    assert_eq!(tree.keys_at_level(1), vec![3, 7]);
    assert_eq!(tree.keys_at_level(2), vec![1, 9]);
    assert!(tree.keys_at_level(3).is_empty());

    assert_eq!(tree.keys(Order::Level), vec![5, 3, 7, 1, 9]);
}

// ============================================================
// First Common Ancestor
// ============================================================

#[rstest]
#[case(1, 9, 5)] // diverge at the root
#[case(1, 3, 3)] // one key is the ancestor itself
#[case(7, 9, 7)]
#[case(1, 1, 1)]
fn given_present_keys_when_finding_ancestor_then_divergence_node(
    #[case] a: i64,
    #[case] b: i64,
    #[case] expected: i64,
) {
    let tree = tree_from(&[5, 7, 3, 9, 1]);
    assert_eq!(tree.first_common_ancestor(a, b), Some(expected));
}

#[test]
fn given_absent_key_when_finding_ancestor_then_none() {
    let tree = tree_from(&[5, 7, 3, 9, 1]);

    assert_eq!(tree.first_common_ancestor(1, 42), None);
    assert_eq!(tree.first_common_ancestor(42, 1), None);
}
