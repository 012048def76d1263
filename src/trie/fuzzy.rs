//! Nearest-word lookup under Levenshtein distance.
//!
//! The lookup walks the trie depth-first and keeps one row of the classic
//! edit-distance table per depth. The row for a node at depth `d` holds the
//! distances between every prefix of the query and the `d`-symbol prefix
//! spelled by the path to that node, so words sharing a prefix share the work
//! for it.
//!
//! All per-query state lives in scratch space owned by the call. Nothing is
//! written to the trie, which keeps concurrent lookups independent.

use std::borrow::Cow;

use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::trie::config::{FuzzyConfig, Traversal};
use crate::trie::node::NodeId;
use crate::trie::trie::Trie;

/// A dictionary word and its edit distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// The matched dictionary word, byte for byte as it was inserted.
    pub word: Vec<u8>,
    /// Levenshtein distance between the query and `word`.
    pub distance: usize,
}

impl FuzzyMatch {
    /// The matched word decoded for display. Invalid UTF-8 sequences are
    /// replaced, so the result is not guaranteed to be in the trie.
    pub fn word_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }
}

/// Working state of one lookup.
struct Scratch<'q> {
    query: &'q [u8],
    /// Query length plus one.
    width: usize,
    /// Distance rows laid out by depth: row `d` is `rows[d * width..(d + 1) * width]`.
    rows: Vec<usize>,
    /// Symbols on the path from the root to the current node.
    word: Vec<u8>,
    best_distance: usize,
    best_word: Option<Vec<u8>>,
    prune: bool,
}

impl<'q> Scratch<'q> {
    fn new(query: &'q [u8], config: &FuzzyConfig) -> Self {
        let width = query.len() + 1;
        Scratch {
            query,
            width,
            rows: (0..width).collect(),
            word: Vec::new(),
            best_distance: config.bound.seed(query.len()),
            best_word: None,
            prune: config.prune,
        }
    }

    /// Offer the root (the empty word) as a candidate.
    fn start(&mut self, root_is_word: bool) -> bool {
        let distance = self.query.len();
        if root_is_word && distance < self.best_distance {
            self.best_distance = distance;
            self.best_word = Some(Vec::new());
        }
        // The root row minimum is always 0.
        self.should_descend(0)
    }

    /// Step from the node at `depth - 1` to its child through `symbol`.
    ///
    /// Computes the child's row, records the child as the best candidate if it
    /// ends a word and beats the current best, and returns the row minimum.
    #[allow(clippy::needless_range_loop)]
    fn enter(&mut self, depth: usize, symbol: u8, is_word_end: bool) -> usize {
        let width = self.width;
        if self.rows.len() < (depth + 1) * width {
            self.rows.resize((depth + 1) * width, 0);
        }

        let (head, tail) = self.rows.split_at_mut(depth * width);
        let parent = &head[(depth - 1) * width..];
        let row = &mut tail[..width];

        row[0] = parent[0] + 1;
        let mut row_min = row[0];
        for i in 1..width {
            let cost = usize::from(self.query[i - 1] != symbol);
            row[i] = (row[i - 1] + 1) // insertion
                .min(parent[i] + 1) // deletion
                .min(parent[i - 1] + cost); // match or substitution
            row_min = row_min.min(row[i]);
        }

        self.word.push(symbol);

        let distance = row[width - 1];
        if is_word_end && distance < self.best_distance {
            self.best_distance = distance;
            self.best_word = Some(self.word.clone());
        }

        row_min
    }

    fn leave(&mut self) {
        self.word.pop();
    }

    /// No entry in a descendant row can be smaller than the minimum of the
    /// row it was computed from.
    fn should_descend(&self, row_min: usize) -> bool {
        !self.prune || row_min < self.best_distance
    }

    fn finish(self) -> Option<FuzzyMatch> {
        let distance = self.best_distance;
        self.best_word.map(|word| FuzzyMatch { word, distance })
    }
}

fn walk_recursive(trie: &Trie, id: NodeId, depth: usize, scratch: &mut Scratch<'_>) {
    for (symbol, child) in trie.node(id).edges().iter() {
        let row_min = scratch.enter(depth + 1, symbol, trie.node(child).is_word_end());
        if scratch.should_descend(row_min) {
            walk_recursive(trie, child, depth + 1, scratch);
        }
        scratch.leave();
    }
}

fn walk_iterative(trie: &Trie, scratch: &mut Scratch<'_>) {
    // (node, depth, index of the next edge to visit)
    let mut stack: Vec<(NodeId, usize, usize)> = vec![(NodeId::ROOT, 0, 0)];

    while let Some(frame) = stack.last_mut() {
        let (id, depth, next) = *frame;
        match trie.edge_at(id, next) {
            Some((symbol, child)) => {
                frame.2 += 1;
                let row_min = scratch.enter(depth + 1, symbol, trie.node(child).is_word_end());
                if scratch.should_descend(row_min) {
                    stack.push((child, depth + 1, 0));
                } else {
                    scratch.leave();
                }
            }
            None => {
                stack.pop();
                if depth > 0 {
                    scratch.leave();
                }
            }
        }
    }
}

impl Trie {
    /// Return the stored word closest to `query`, or an empty byte string if
    /// no word qualifies.
    ///
    /// Uses the default [`FuzzyConfig`]: a word must be strictly closer than
    /// the query length, so an empty query always yields the empty string.
    /// Among equally close words the first one visited wins; visiting runs
    /// depth-first in ascending symbol order.
    pub fn fuzzy_lookup<Q: AsRef<[u8]>>(&self, query: Q) -> Vec<u8> {
        self.fuzzy_lookup_with(query, &FuzzyConfig::default())
    }

    /// [`fuzzy_lookup`](Self::fuzzy_lookup) with an explicit configuration.
    pub fn fuzzy_lookup_with<Q: AsRef<[u8]>>(&self, query: Q, config: &FuzzyConfig) -> Vec<u8> {
        self.nearest_with(query, config)
            .map(|found| found.word)
            .unwrap_or_default()
    }

    /// Return the closest stored word together with its distance.
    pub fn nearest<Q: AsRef<[u8]>>(&self, query: Q) -> Option<FuzzyMatch> {
        self.nearest_with(query, &FuzzyConfig::default())
    }

    /// [`nearest`](Self::nearest) with an explicit configuration.
    pub fn nearest_with<Q: AsRef<[u8]>>(
        &self,
        query: Q,
        config: &FuzzyConfig,
    ) -> Option<FuzzyMatch> {
        let query = query.as_ref();
        let mut scratch = Scratch::new(query, config);

        if scratch.start(self.root().is_word_end()) {
            match config.traversal {
                Traversal::Recursive => walk_recursive(self, NodeId::ROOT, 0, &mut scratch),
                Traversal::Iterative => walk_iterative(self, &mut scratch),
            }
        }

        let found = scratch.finish();
        trace!(
            "Fuzzy lookup for {:?} -> {:?}",
            String::from_utf8_lossy(query),
            found
        );
        found
    }

    /// Run [`nearest_with`](Self::nearest_with) for many queries in parallel.
    ///
    /// Results come back in the order of `queries`.
    pub fn batch_lookup<Q>(&self, queries: &[Q], config: &FuzzyConfig) -> Vec<Option<FuzzyMatch>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.nearest_with(query, config))
            .collect()
    }
}
