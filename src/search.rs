//! Queue- and stack-based membership search.
//!
//! Both walkers push child slots as they come, absent or not, and skip empty
//! slots when they surface; they terminate on a key match or once every
//! reachable node has been visited (the tree is acyclic by invariant).

use std::collections::VecDeque;

use tracing::instrument;

use crate::node::Node;

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First-in-first-out queue: level-by-level exploration.
    Breadth,
    /// Last-in-first-out stack: pre-order-like exploration.
    Depth,
}

/// Breadth-first search for `target` starting at `root`.
///
/// Returns the matched key, or `None` when the queue drains without a match;
/// an empty tree is an immediate miss.
#[instrument(level = "trace", skip(root))]
pub fn breadth_first(root: Option<&Node>, target: i64) -> Option<i64> {
    let mut queue: VecDeque<Option<&Node>> = VecDeque::new();
    queue.push_back(root);

    while let Some(slot) = queue.pop_front() {
        let Some(node) = slot else { continue };
        if node.key == target {
            return Some(node.key);
        }
        queue.push_back(node.left.as_deref());
        queue.push_back(node.right.as_deref());
    }

    None
}

/// Depth-first search for `target` starting at `root`.
///
/// Same contract as `breadth_first` with a stack instead of a queue; the
/// visiting order is unspecified beyond covering every reachable node.
#[instrument(level = "trace", skip(root))]
pub fn depth_first(root: Option<&Node>, target: i64) -> Option<i64> {
    let mut stack: Vec<Option<&Node>> = vec![root];

    while let Some(slot) = stack.pop() {
        let Some(node) = slot else { continue };
        if node.key == target {
            return Some(node.key);
        }
        stack.push(node.left.as_deref());
        stack.push(node.right.as_deref());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtree() -> Node {
        let mut node = Node::new(10);
        for key in [4, 16, 2, 8, 12] {
            node.insert(key);
        }
        node
    }

    #[test]
    fn given_empty_root_when_searching_then_immediate_miss() {
        assert_eq!(breadth_first(None, 1), None);
        assert_eq!(depth_first(None, 1), None);
    }

    #[test]
    fn given_subtree_when_searching_present_key_then_both_strategies_hit() {
        let node = subtree();
        assert_eq!(breadth_first(Some(&node), 8), Some(8));
        assert_eq!(depth_first(Some(&node), 8), Some(8));
    }

    #[test]
    fn given_subtree_when_searching_absent_key_then_both_strategies_miss() {
        let node = subtree();
        assert_eq!(breadth_first(Some(&node), 99), None);
        assert_eq!(depth_first(Some(&node), 99), None);
    }
}
