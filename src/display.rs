//! Terminal tree rendering via termtree.

use termtree::Tree as TermTree;

use crate::node::Node;
use crate::tree::Tree;

/// Render a tree structure as an indented termtree string.
pub trait TreeRender {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl TreeRender for Node {
    fn to_tree_string(&self) -> TermTree<String> {
        let mut rendered = TermTree::new(self.key.to_string());
        if let Some(left) = self.left.as_deref() {
            rendered.push(left.to_tree_string());
        }
        if let Some(right) = self.right.as_deref() {
            rendered.push(right.to_tree_string());
        }
        rendered
    }
}

impl TreeRender for Tree {
    fn to_tree_string(&self) -> TermTree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => TermTree::new("Empty tree".to_string()),
        }
    }
}
