//! Trie node and node identifiers.

use serde::{Deserialize, Serialize};

use crate::trie::edges::EdgeStore;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, representing the empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    /// Wrap a raw arena index.
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One prefix position in the trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Whether the path from the root to this node spells an inserted word.
    pub(crate) is_word_end: bool,
    pub(crate) edges: EdgeStore,
}

impl TrieNode {
    /// Create a node with no children that is not a word end.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Whether this node terminates a dictionary word.
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Outgoing edges of this node.
    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    /// Child reached through `symbol`.
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        self.edges.find(symbol)
    }
}
