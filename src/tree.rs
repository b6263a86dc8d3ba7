//! Tree queries over `{ value, children? }` nodes

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tree node: a value and an optional ordered list of children
///
/// A node whose `children` is absent or empty is a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(value: impl Into<Value>) -> Self {
        TreeNode {
            value: value.into(),
            children: None,
        }
    }

    pub fn with_children(value: impl Into<Value>, children: Vec<TreeNode>) -> Self {
        TreeNode {
            value: value.into(),
            children: Some(children),
        }
    }

    /// Read a node from its JSON form, e.g. `{"value": "A", "children": [{"value": "B"}]}`
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    /// Children of this node; empty for a leaf
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Number of levels in the tree; a lone leaf has depth 1
pub fn get_tree_depth(node: &TreeNode) -> usize {
    1 + node.children().iter().map(get_tree_depth).max().unwrap_or(0)
}

/// Number of nodes with no children, counted across every subtree
///
/// This counts leaves directly. It does not mix in subtree depths the way an
/// earlier formula for this query did, which under-counted sibling subtrees.
pub fn count_tree_leaf_nodes(node: &TreeNode) -> usize {
    if node.is_leaf() {
        return 1;
    }
    node.children().iter().map(count_tree_leaf_nodes).sum()
}
