//! Arena-backed prefix tree with exact insert and membership.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::trie::edges::Edge;
use crate::trie::node::{NodeId, TrieNode};

/// Summary of the trie's shape and memory footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Distinct words stored.
    pub words: usize,
    /// Nodes in the arena, including the root.
    pub nodes: usize,
    /// Parent-to-child edges.
    pub edges: usize,
    /// Length of the longest root-to-node path.
    pub max_depth: usize,
    /// Estimated heap bytes held by the arena and edge vectors.
    pub heap_bytes: usize,
}

/// A dictionary of byte strings stored as a prefix tree.
///
/// Nodes live in a single arena and refer to their children by [`NodeId`].
/// Node 0 is the root and represents the empty prefix. All queries take
/// `&self` and keep their working state on the caller's side, so a built trie
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie holding only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new()],
            word_count: 0,
        }
    }

    /// Insert a word, creating nodes for any unseen suffix.
    ///
    /// Returns `true` if the word was not already present. The empty word is
    /// legal and marks the root as a word end.
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) -> bool {
        let mut current = NodeId::ROOT;

        for &symbol in word.as_ref() {
            let next = NodeId::new(self.nodes.len());
            let (child, created) = self.nodes[current.index()]
                .edges
                .get_or_create(symbol, || next);
            if created {
                self.nodes.push(TrieNode::new());
            }
            current = child;
        }

        let node = &mut self.nodes[current.index()];
        let added = !node.is_word_end;
        node.is_word_end = true;
        if added {
            self.word_count += 1;
        }
        added
    }

    /// Check whether `word` was inserted.
    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.find_node(word.as_ref())
            .is_some_and(|id| self.node(id).is_word_end)
    }

    fn find_node(&self, path: &[u8]) -> Option<NodeId> {
        path.iter()
            .try_fold(NodeId::ROOT, |id, &symbol| self.node(id).child(symbol))
    }

    /// The node stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this trie.
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        self.node(NodeId::ROOT)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All stored words in ascending byte order.
    pub fn words(&self) -> Vec<Vec<u8>> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut buffer = Vec::new();

        if self.root().is_word_end {
            words.push(Vec::new());
        }

        let mut stack: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, 0)];
        while let Some(frame) = stack.last_mut() {
            let (id, next) = *frame;
            match self.node(id).edges.get(next) {
                Some((symbol, child)) => {
                    frame.1 += 1;
                    buffer.push(symbol);
                    if self.node(child).is_word_end {
                        words.push(buffer.clone());
                    }
                    stack.push((child, 0));
                }
                None => {
                    stack.pop();
                    buffer.pop();
                }
            }
        }

        words
    }

    /// Compute structural statistics.
    pub fn stats(&self) -> TrieStats {
        // Children are always allocated after their parent, so one forward
        // pass over the arena sees every parent depth before its children.
        let mut depths = vec![0usize; self.nodes.len()];
        let mut edges = 0;
        let mut max_depth = 0;
        let mut heap_bytes = self.nodes.capacity() * std::mem::size_of::<TrieNode>();

        for (index, node) in self.nodes.iter().enumerate() {
            heap_bytes += node.edges.heap_bytes();
            edges += node.edges.len();
            let child_depth = depths[index] + 1;
            for (_, child) in node.edges.iter() {
                depths[child.index()] = child_depth;
                max_depth = max_depth.max(child_depth);
            }
        }

        TrieStats {
            words: self.word_count,
            nodes: self.nodes.len(),
            edges,
            max_depth,
            heap_bytes,
        }
    }

    /// Release unused arena and edge capacity after the build phase.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
        for node in &mut self.nodes {
            node.edges.shrink_to_fit();
        }
        debug!(
            "Shrunk trie to {} nodes holding {} words",
            self.nodes.len(),
            self.word_count
        );
    }

    /// The `index`-th edge of `id`, counting in ascending symbol order.
    pub(crate) fn edge_at(&self, id: NodeId, index: usize) -> Option<Edge> {
        self.node(id).edges.get(index)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<[u8]>> Extend<W> for Trie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for Trie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
