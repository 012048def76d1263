//! Prefix tree with exact membership and nearest-word lookup.
//!
//! Words are byte strings. A [`Trie`] is built once by inserting every word,
//! then queried any number of times with [`Trie::contains`] for exact
//! membership or [`Trie::fuzzy_lookup`] / [`Trie::nearest`] for the closest
//! word under Levenshtein distance.

pub mod config;
pub mod edges;
pub mod fuzzy;
pub mod node;
pub mod trie;

// Re-export commonly used types
pub use config::*;
pub use edges::EdgeStore;
pub use fuzzy::FuzzyMatch;
pub use node::{NodeId, TrieNode};
pub use trie::{Trie, TrieStats};
