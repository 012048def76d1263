//! Error types for the LexTrie library.
//!
//! Building and querying a trie never fails; errors only arise at the edges,
//! when reading word lists, loading configuration or rendering CLI output.
//! All of them are represented by the [`LexTrieError`] enum.
//!
//! # Examples
//!
//! ```
//! use lextrie::error::{LexTrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexTrieError::config("unknown traversal"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for LexTrie operations.
#[derive(Error, Debug)]
pub enum LexTrieError {
    /// I/O errors (word lists, query input, configuration files)
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exact verification found words the trie does not contain
    #[error("Verification failed: {0}")]
    Verification(String),

    /// An error with context attached, shown with its whole cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexTrieError.
pub type Result<T> = std::result::Result<T, LexTrieError>;

impl LexTrieError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexTrieError::Config(msg.into())
    }

    /// Create a new verification error.
    pub fn verification<S: Into<String>>(msg: S) -> Self {
        LexTrieError::Verification(msg.into())
    }
}
