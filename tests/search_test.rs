//! Tests for BFS/DFS membership search

use rstest::rstest;

use rstree::{Strategy, Tree};

fn tree_from(keys: &[i64]) -> Tree {
    let mut tree = Tree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

// ============================================================
// Hits
// ============================================================

#[rstest]
#[case(Strategy::Breadth)]
#[case(Strategy::Depth)]
fn given_inserted_keys_when_searching_then_every_key_found(#[case] strategy: Strategy) {
    let keys = [8, 3, 10, 1, 6, 14, 4, 7, 13];
    let tree = tree_from(&keys);

    for key in keys {
        assert_eq!(tree.search(key, strategy), Some(key));
    }
}

#[rstest]
#[case(Strategy::Breadth)]
#[case(Strategy::Depth)]
fn given_single_node_when_searching_root_key_then_found(#[case] strategy: Strategy) {
    let tree = tree_from(&[42]);
    assert_eq!(tree.search(42, strategy), Some(42));
}

// ============================================================
// Misses
// ============================================================

#[rstest]
#[case(Strategy::Breadth)]
#[case(Strategy::Depth)]
fn given_absent_keys_when_searching_then_not_found(#[case] strategy: Strategy) {
    let tree = tree_from(&[8, 3, 10, 1, 6]);

    for key in [0, 2, 5, 9, 99, -1] {
        assert_eq!(tree.search(key, strategy), None);
    }
}

#[rstest]
#[case(Strategy::Breadth)]
#[case(Strategy::Depth)]
fn given_empty_tree_when_searching_then_immediate_miss(#[case] strategy: Strategy) {
    let tree = Tree::new();
    assert_eq!(tree.search(7, strategy), None);
}

// ============================================================
// Strategy Agreement
// ============================================================

#[test]
fn given_any_key_when_searching_then_strategies_agree() {
    let tree = tree_from(&[5, 7, 3, 9, 1]);

    for key in -2..12 {
        assert_eq!(
            tree.search(key, Strategy::Breadth),
            tree.search(key, Strategy::Depth),
            "strategies disagree on {}",
            key
        );
    }
}
