//! Per-node edge storage.
//!
//! Edges are kept in a vector sorted by symbol. Lookup is a binary search and
//! iteration always runs in ascending symbol order, which fixes the order in
//! which fuzzy lookups visit the trie.

use crate::trie::node::NodeId;

/// A single labelled edge to a child node.
pub type Edge = (u8, NodeId);

/// Mapping from a symbol to the child node reached through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeStore {
    edges: Vec<Edge>,
}

impl EdgeStore {
    /// Create an empty edge store.
    pub fn new() -> Self {
        EdgeStore { edges: Vec::new() }
    }

    /// Find the child reached through `symbol`.
    pub fn find(&self, symbol: u8) -> Option<NodeId> {
        self.edges
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|pos| self.edges[pos].1)
    }

    /// Return the child reached through `symbol`, linking a new one if absent.
    ///
    /// `make` is only called when no edge exists yet; it must allocate the
    /// child and return its id. The second element of the returned pair is
    /// `true` when a new child was created.
    pub fn get_or_create<F>(&mut self, symbol: u8, make: F) -> (NodeId, bool)
    where
        F: FnOnce() -> NodeId,
    {
        match self.edges.binary_search_by_key(&symbol, |&(s, _)| s) {
            Ok(pos) => (self.edges[pos].1, false),
            Err(pos) => {
                let child = make();
                self.edges.insert(pos, (symbol, child));
                (child, true)
            }
        }
    }

    /// Iterate over edges in ascending symbol order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Edge> + ExactSizeIterator + '_ {
        self.edges.iter().copied()
    }

    /// Edge at position `index` in ascending symbol order.
    pub fn get(&self, index: usize) -> Option<Edge> {
        self.edges.get(index).copied()
    }

    /// Number of outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.edges.shrink_to_fit();
    }

    /// Heap bytes held by this store.
    pub(crate) fn heap_bytes(&self) -> usize {
        self.edges.capacity() * std::mem::size_of::<Edge>()
    }
}
