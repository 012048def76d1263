//! # LexTrie
//!
//! An in-memory dictionary with exact membership and nearest-word lookup
//! under Levenshtein distance, built on a prefix tree.
//!
//! ## Features
//!
//! - Arena-backed trie with deterministic, ascending edge order
//! - Incremental edit-distance rows shared across common prefixes
//! - Recursive or explicit-stack traversal
//! - Lookups take `&self` and can run in parallel
//! - Word-list loading and a command-line front end
//!
//! ```
//! use lextrie::trie::Trie;
//!
//! let trie: Trie = ["cat", "cats", "cot", "dog"].into_iter().collect();
//! assert!(trie.contains("cot"));
//! assert_eq!(trie.fuzzy_lookup("cab"), b"cat");
//! ```

pub mod cli;
pub mod error;
pub mod spelling;
pub mod trie;

pub mod prelude {
    pub use crate::error::{LexTrieError, Result};
    pub use crate::trie::{FuzzyConfig, FuzzyMatch, SearchBound, Traversal, Trie, TrieStats};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
