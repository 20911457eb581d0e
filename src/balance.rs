//! Balance-via-sorted-rebuild.
//!
//! The balancer flattens the tree, sorts the keys, and rebuilds around the
//! middle element. Re-inserting the remaining elements in sorted order (rather
//! than recursively picking medians of each half) does not guarantee a
//! minimal-height result, but it lowers the height of skewed trees while
//! preserving the key set exactly.

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::tree::Tree;

impl Tree {
    /// Rebuilds the tree from its sorted key sequence.
    ///
    /// 1. Collect every reachable key via level-order traversal.
    /// 2. Sort ascending.
    /// 3. Discard the current structure.
    /// 4. Insert the element at `floor(count / 2)` as the new root.
    /// 5. Re-insert the remaining elements in sorted order.
    ///
    /// An empty tree stays empty. The key set and `size()` are unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn balance(&mut self) {
        let keys: Vec<i64> = self.iter_levelorder().sorted().collect();
        self.clear();

        if keys.is_empty() {
            return;
        }

        let mid = keys.len() / 2;
        self.insert(keys[mid]);
        for (i, &key) in keys.iter().enumerate() {
            if i != mid {
                self.insert(key);
            }
        }

        debug!(
            size = keys.len(),
            depth = self.depth(),
            "rebuilt tree from sorted keys"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::Order;

    #[test]
    fn given_empty_tree_when_balancing_then_stays_empty() {
        let mut tree = Tree::new();
        tree.balance();
        assert!(tree.is_empty());
    }

    #[test]
    fn given_right_skewed_tree_when_balancing_then_middle_key_becomes_root() {
        let mut tree = Tree::new();
        for key in [10, 20, 30, 40, 50] {
            tree.insert(key);
        }
        tree.balance();

        assert_eq!(tree.root().map(|n| n.key), Some(30));
        assert_eq!(tree.keys(Order::In), vec![10, 20, 30, 40, 50]);
    }
}
