use std::fmt;

/// A single vertex of the binary search tree.
///
/// A node exclusively owns its children; there is no parent back-reference,
/// traversal is always top-down from a held root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub key: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl Node {
    pub fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Inserts `key` into the subtree rooted at this node.
    ///
    /// Descends comparing keys: equal keys are silently rejected, smaller keys
    /// go left, larger go right. A new node is attached at the first absent
    /// child slot on the descent path. This is the subtree-relative insertion
    /// variant; `Tree::insert` delegates here starting from the root.
    pub fn insert(&mut self, key: i64) {
        use std::cmp::Ordering;

        match key.cmp(&self.key) {
            Ordering::Equal => {} // no duplicates
            Ordering::Less => match self.left {
                Some(ref mut left) => left.insert(key),
                None => self.left = Some(Box::new(Node::new(key))),
            },
            Ordering::Greater => match self.right {
                Some(ref mut right) => right.insert(key),
                None => self.right = Some(Box::new(Node::new(key))),
            },
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf,
    /// counting this node itself.
    pub fn depth(&self) -> usize {
        1 + [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Counts the nodes in the subtree rooted at this node.
    pub fn count(&self) -> usize {
        1 + [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
            .map(Node::count)
            .sum::<usize>()
    }
}
