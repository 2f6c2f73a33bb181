//! Reconstruction of the blocktree from flat per-branch block lists.
//!
//! Each branch becomes a singly linked chain of nodes. A branch's child
//! branches are grafted onto the deepest node of that chain, so the result
//! mirrors how the chain service splits branches off the tail of their
//! parent.

use crate::block::{Block, Branch, ChainSnapshot};
use serde::{Deserialize, Serialize};

pub const ROOT_NAME: &str = "Root";

/// Hash characters kept in a node label.
pub const LABEL_HASH_LEN: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    pub full_hash: String,
    pub location: String,
    pub timestamp: i64,
    pub id: u64,
}

/// Node shape consumed by tree widgets (`name`, `attributes`, `children`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NodeAttributes>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn root(children: Vec<TreeNode>) -> Self {
        TreeNode {
            name: ROOT_NAME.to_string(),
            attributes: None,
            children,
        }
    }

    pub fn from_block(block: &Block, prefix: &str, children: Vec<TreeNode>) -> Self {
        TreeNode {
            name: format!(
                "{}{} ({})",
                prefix,
                block.id,
                block.short_hash(LABEL_HASH_LEN)
            ),
            attributes: Some(NodeAttributes {
                full_hash: block.hash.clone(),
                location: block.location.clone(),
                timestamp: block.timestamp,
                id: block.id,
            }),
            children,
        }
    }

    /// Number of nodes on the longest root-to-leaf path, this node included.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// True when no node in the subtree has more than one child.
    pub fn is_linear(&self) -> bool {
        let mut node = self;
        loop {
            match node.children.as_slice() {
                [] => return true,
                [only] => node = only,
                _ => return false,
            }
        }
    }
}

/// Chains `blocks` oldest-first and hangs `grafts` under the last block.
///
/// An empty block list has no tail to graft onto, so `grafts` is returned
/// as is and ends up attached wherever this chain would have been.
pub fn chain(blocks: &[Block], prefix: &str, grafts: Vec<TreeNode>) -> Vec<TreeNode> {
    blocks.iter().rev().fold(grafts, |children, block| {
        vec![TreeNode::from_block(block, prefix, children)]
    })
}

/// Subtrees produced by `branch` and all of its descendants.
fn grow(snapshot: &ChainSnapshot, branch: Branch) -> Vec<TreeNode> {
    let grafts = branch
        .children()
        .flat_map(|child| grow(snapshot, child))
        .collect();
    chain(snapshot.branch(branch), branch.prefix(), grafts)
}

/// Builds the full tree under a synthetic `Root` node.
pub fn build_tree(snapshot: &ChainSnapshot) -> TreeNode {
    TreeNode::root(grow(snapshot, Branch::Main))
}
