//! Configuration for fuzzy lookups.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexTrieError, Result};

/// How the distance-frontier traversal walks the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Plain call recursion. Stack depth grows with the longest word.
    Recursive,
    /// Explicit frame stack on the heap.
    Iterative,
}

/// Initial bound a candidate must beat to be reported.
///
/// A word is reported only if its distance is strictly less than the current
/// best, which starts at the value given by this bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchBound {
    /// Start at the query length. An empty query can never match, and a word
    /// at distance equal to the query length is never reported.
    QueryLength,
    /// No bound: the nearest word is always found in a non-empty trie.
    Unbounded,
    /// Only words within the given distance qualify.
    MaxDistance(usize),
}

impl SearchBound {
    /// The best-distance seed for a query of `query_len` symbols.
    pub fn seed(self, query_len: usize) -> usize {
        match self {
            SearchBound::QueryLength => query_len,
            SearchBound::Unbounded => usize::MAX,
            SearchBound::MaxDistance(max) => max.saturating_add(1),
        }
    }
}

/// Options for [`Trie::nearest_with`](crate::trie::Trie::nearest_with) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Traversal strategy.
    pub traversal: Traversal,

    /// Bound a candidate distance must beat.
    pub bound: SearchBound,

    /// Skip subtrees whose distance row cannot beat the current best.
    /// Never changes the result.
    pub prune: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::Iterative,
            bound: SearchBound::QueryLength,
            prune: true,
        }
    }
}

impl FuzzyConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Set the search bound.
    pub fn with_bound(mut self, bound: SearchBound) -> Self {
        self.bound = bound;
        self
    }

    /// Enable or disable subtree pruning.
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            LexTrieError::config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bound_seed() {
        assert_eq!(SearchBound::QueryLength.seed(4), 4);
        assert_eq!(SearchBound::QueryLength.seed(0), 0);
        assert_eq!(SearchBound::Unbounded.seed(4), usize::MAX);
        assert_eq!(SearchBound::MaxDistance(2).seed(10), 3);
        assert_eq!(SearchBound::MaxDistance(usize::MAX).seed(1), usize::MAX);
    }

    #[test]
    fn test_builder() {
        let config = FuzzyConfig::new()
            .with_traversal(Traversal::Recursive)
            .with_bound(SearchBound::Unbounded)
            .with_prune(false);

        assert_eq!(config.traversal, Traversal::Recursive);
        assert_eq!(config.bound, SearchBound::Unbounded);
        assert!(!config.prune);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FuzzyConfig =
            serde_json::from_str(r#"{"bound": {"max_distance": 2}}"#).unwrap();
        assert_eq!(config.bound, SearchBound::MaxDistance(2));
        assert_eq!(config.traversal, Traversal::Iterative);
        assert!(config.prune);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"traversal": "recursive", "bound": "unbounded"}}"#).unwrap();
        file.flush().unwrap();

        let config = FuzzyConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.traversal, Traversal::Recursive);
        assert_eq!(config.bound, SearchBound::Unbounded);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        file.flush().unwrap();

        let err = FuzzyConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LexTrieError::Config(_)));
    }
}
