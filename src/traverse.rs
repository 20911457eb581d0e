//! Lazy traversal iterators over the tree.
//!
//! Each iterator re-walks from the root it was created with, carries an
//! explicit stack (or per-level buffer) instead of recursing, and yields keys
//! only; printing and formatting stay with the caller.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

/// Traversal orders exposed by `Tree::keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, node, right subtree; sorted for a valid BST.
    In,
    /// Left subtree, right subtree, node.
    Post,
    /// Each depth level top-down, left-to-right within a level.
    Level,
}

pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped (visited) first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node.key)
    }
}

pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(node.key)
    }
}

pub struct PostOrder<'a> {
    // (node, children already expanded)
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl Iterator for PostOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.key);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Top-down level-order traversal: level 0 is the root, each level is
/// produced by descending exactly `level` edges along every path.
pub struct LevelOrder<'a> {
    tree: &'a Tree,
    depth: usize,
    level: usize,
    buffer: VecDeque<i64>,
}

impl<'a> LevelOrder<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            depth: tree.depth(),
            level: 0,
            buffer: VecDeque::new(),
        }
    }
}

impl Iterator for LevelOrder<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.buffer.pop_front() {
                return Some(key);
            }
            if self.level >= self.depth {
                return None;
            }
            self.buffer = self.tree.keys_at_level(self.level).into();
            self.level += 1;
        }
    }
}
