//! Word-list loading for building a trie.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::error::Result;
use crate::trie::Trie;

/// A trie built from a word list, with counts gathered while loading.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// The built trie.
    pub trie: Trie,
    /// Lines read from the source, including skipped empty lines.
    pub lines_read: usize,
    /// Distinct words inserted.
    pub words_inserted: usize,
    /// Lines that repeated an earlier word.
    pub duplicates: usize,
    /// Wall-clock time spent reading and inserting.
    pub elapsed: Duration,
}

/// Build a trie from a reader with one word per line.
///
/// A trailing `\r` is stripped so CRLF files load the same as LF files.
/// Empty lines are skipped. No other normalization is applied: words are
/// inserted byte for byte, case included.
pub fn load_trie_from_reader<R: BufRead>(mut reader: R) -> Result<LoadReport> {
    let start = Instant::now();
    let mut trie = Trie::new();
    let mut lines_read = 0;
    let mut duplicates = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines_read += 1;

        let word = trim_line_ending(&line);
        if word.is_empty() {
            continue;
        }
        if !trie.insert(word) {
            duplicates += 1;
        }

        if lines_read % 100_000 == 0 {
            debug!("Loaded {lines_read} lines, {} words so far", trie.len());
        }
    }

    trie.shrink_to_fit();
    let elapsed = start.elapsed();
    info!(
        "Built trie with {} words ({} nodes) from {} lines in {:?}",
        trie.len(),
        trie.node_count(),
        lines_read,
        elapsed
    );

    Ok(LoadReport {
        words_inserted: trie.len(),
        trie,
        lines_read,
        duplicates,
        elapsed,
    })
}

/// Build a trie from a word-list file with one word per line.
pub fn load_trie_from_file<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    let path = path.as_ref();
    debug!("Loading word list from {}", path.display());
    let file = File::open(path)?;
    load_trie_from_reader(BufReader::new(file))
}

/// Read a word list into memory, in file order, with the same line handling
/// as [`load_trie_from_reader`].
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let word = trim_line_ending(&line);
        if !word.is_empty() {
            words.push(word.to_vec());
        }
    }
    Ok(words)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
