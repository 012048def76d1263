//! Word-list loading and reference edit distance.

pub mod dictionary;
pub mod levenshtein;

// Re-export commonly used types
pub use dictionary::*;
pub use levenshtein::*;
