//! Command line argument parsing for the LexTrie CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::trie::{FuzzyConfig, SearchBound, Traversal};

/// LexTrie - exact and nearest-word lookup over a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "lextrie")]
#[command(about = "Exact and nearest-word lookup over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexTrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Fuzzy lookup configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexTrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the nearest word for each query given on the command line
    Lookup(LookupArgs),

    /// Read whitespace-separated queries until end of input
    Query(QueryArgs),

    /// Check that every word in the list is found by exact lookup
    Verify(VerifyArgs),

    /// Show trie statistics for a word list
    Stats(StatsArgs),
}

/// Flags that override the fuzzy lookup configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchFlags {
    /// Always report the nearest word, however distant
    #[arg(long)]
    pub unbounded: bool,

    /// Only report words within this edit distance
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_distance: Option<usize>,

    /// Use call recursion instead of an explicit stack
    #[arg(long)]
    pub recursive: bool,

    /// Visit the whole trie instead of skipping hopeless subtrees
    #[arg(long)]
    pub no_prune: bool,
}

impl SearchFlags {
    /// Apply the flags on top of `config`.
    pub fn apply(&self, mut config: FuzzyConfig) -> FuzzyConfig {
        if self.unbounded {
            config.bound = SearchBound::Unbounded;
        }
        if let Some(max) = self.max_distance {
            config.bound = SearchBound::MaxDistance(max);
        }
        if self.recursive {
            config.traversal = Traversal::Recursive;
        }
        if self.no_prune {
            config.prune = false;
        }
        config
    }
}

/// Arguments for one-shot lookups
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Query strings
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub search: SearchFlags,
}

/// Arguments for the query loop
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Read queries from this file instead of standard input
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Report the time taken by each lookup
    #[arg(short, long)]
    pub timing: bool,

    #[command(flatten)]
    pub search: SearchFlags,
}

/// Arguments for exact verification
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Maximum number of missing words to list
    #[arg(long, default_value = "20")]
    pub max_report: usize,
}

/// Arguments for trie statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
