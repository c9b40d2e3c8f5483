//! Shared base types for nodes: `NodeIndex` and `NodeList`.

use serde::{Deserialize, Serialize};

/// Index of a node in its `NodeArena`.
///
/// Node identity is positional: two indices are the same node exactly when
/// they are equal. `NodeIndex::NONE` stands for an absent child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes (arguments, parameters, statements, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
    pub pos: u32,
    pub end: u32,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList::default()
    }

    pub fn with_range(nodes: Vec<NodeIndex>, pos: u32, end: u32) -> NodeList {
        NodeList { nodes, pos, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<NodeIndex> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList {
            nodes,
            pos: 0,
            end: 0,
        }
    }
}
