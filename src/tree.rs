use tracing::instrument;

use crate::node::Node;
use crate::search::{self, Strategy};
use crate::traverse::{InOrder, LevelOrder, Order, PostOrder, PreOrder};

/// Binary search tree over `i64` keys.
///
/// The tree owns its root (if any); size and depth are recomputed on demand.
/// Duplicate keys are rejected silently on insert, so after any insert-only
/// history the BST ordering invariant holds. Balancing is an explicit
/// operation (`balance`), not an automatic invariant.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree around an existing root node. Mostly useful for tests
    /// that need to construct shapes bypassing normal insertion.
    pub fn with_root(node: Node) -> Self {
        Self {
            root: Some(Box::new(node)),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key`, attaching exactly one new node, or nothing if the key
    /// is already present.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: i64) {
        match self.root {
            Some(ref mut root) => root.insert(key),
            None => self.root = Some(Box::new(Node::new(key))),
        }
    }

    /// Number of nodes reachable from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn size(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    /// Length of the longest root-to-leaf path, counting the root as 1.
    /// An empty tree has depth 0.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.as_deref().map_or(0, Node::depth)
    }

    /// Detaches the root; every node becomes unreachable.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn iter_preorder(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    pub fn iter_inorder(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }

    pub fn iter_postorder(&self) -> PostOrder<'_> {
        PostOrder::new(self.root())
    }

    pub fn iter_levelorder(&self) -> LevelOrder<'_> {
        LevelOrder::new(self)
    }

    /// Collects the keys in the given traversal order.
    pub fn keys(&self, order: Order) -> Vec<i64> {
        match order {
            Order::Pre => self.iter_preorder().collect(),
            Order::In => self.iter_inorder().collect(),
            Order::Post => self.iter_postorder().collect(),
            Order::Level => self.iter_levelorder().collect(),
        }
    }

    /// Keys at exactly `level` edges below the root, left-to-right.
    /// Absent nodes contribute nothing.
    pub fn keys_at_level(&self, level: usize) -> Vec<i64> {
        let mut keys = Vec::new();
        collect_level(self.root(), level, &mut keys);
        keys
    }

    /// Looks up `key` with the chosen search strategy. Returns the key if
    /// found; a miss and an empty tree are both `None`.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, key: i64, strategy: Strategy) -> Option<i64> {
        match strategy {
            Strategy::Breadth => search::breadth_first(self.root(), key),
            Strategy::Depth => search::depth_first(self.root(), key),
        }
    }

    /// Checks the BST ordering invariant node-locally: a left child's key may
    /// not exceed its parent's, a right child's may not be less.
    ///
    /// The empty tree reports NOT valid. There is no root to check, and the
    /// predicate degenerates to `false` rather than vacuously `true`; callers
    /// that want vacuous truth must test `is_empty` first.
    #[instrument(level = "debug", skip(self))]
    pub fn is_valid(&self) -> bool {
        self.root.as_deref().is_some_and(validate)
    }

    /// Path from the root to a leaf following right children, together with
    /// the keys along it. For a valid BST with non-negative keys this is the
    /// maximum-sum root-to-leaf path; negative keys break the heuristic.
    ///
    /// An invalid tree is balanced first, then the same descent applies.
    #[instrument(level = "debug", skip(self))]
    pub fn max_sum_path(&mut self) -> Vec<i64> {
        if !self.is_valid() {
            self.balance();
        }

        let mut path = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            path.push(node.key);
            current = node.right.as_deref();
        }
        path
    }

    /// First common ancestor of two keys: the shallowest node where the
    /// descent paths towards `a` and `b` diverge (or that holds one of them).
    ///
    /// Both keys must be present; otherwise `None`. Presence is established
    /// with a depth-first search so it holds even for trees that fail
    /// `is_valid`.
    #[instrument(level = "debug", skip(self))]
    pub fn first_common_ancestor(&self, a: i64, b: i64) -> Option<i64> {
        self.search(a, Strategy::Depth)?;
        self.search(b, Strategy::Depth)?;

        let mut current = self.root.as_deref()?;
        loop {
            if a < current.key && b < current.key {
                current = current.left.as_deref()?;
            } else if a > current.key && b > current.key {
                current = current.right.as_deref()?;
            } else {
                return Some(current.key);
            }
        }
    }
}

fn validate(node: &Node) -> bool {
    if let Some(ref left) = node.left {
        if left.key > node.key {
            return false;
        }
        if !validate(left) {
            return false;
        }
    }

    if let Some(ref right) = node.right {
        if right.key < node.key {
            return false;
        }
        if !validate(right) {
            return false;
        }
    }

    true
}

fn collect_level(node: Option<&Node>, level: usize, keys: &mut Vec<i64>) {
    let Some(node) = node else {
        return;
    };
    if level == 0 {
        keys.push(node.key);
        return;
    }
    collect_level(node.left.as_deref(), level - 1, keys);
    collect_level(node.right.as_deref(), level - 1, keys);
}
