//! Command implementations for the LexTrie CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexTrieError, Result};
use crate::spelling::dictionary::{LoadReport, load_trie_from_file, read_word_list};
use crate::trie::{FuzzyConfig, Trie};

/// Execute a CLI command.
pub fn execute_command(args: LexTrieArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup(lookup_args, &args),
        Command::Query(query_args) => query_loop(query_args, &args),
        Command::Verify(verify_args) => verify(verify_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Load the fuzzy configuration file, if any, and apply flag overrides.
fn resolve_config(cli_args: &LexTrieArgs, flags: &SearchFlags) -> Result<FuzzyConfig> {
    let base = match &cli_args.config {
        Some(path) => {
            debug!("Loading fuzzy configuration from {}", path.display());
            FuzzyConfig::load_from_file(path)?
        }
        None => FuzzyConfig::default(),
    };
    Ok(flags.apply(base))
}

fn load_word_list(path: &Path) -> Result<LoadReport> {
    let report = load_trie_from_file(path)
        .with_context(|| format!("failed to load word list {}", path.display()))?;
    Ok(report)
}

/// Look up every query given on the command line.
fn lookup(args: &LookupArgs, cli_args: &LexTrieArgs) -> Result<()> {
    let config = resolve_config(cli_args, &args.search)?;
    let report = load_word_list(&args.word_list)?;

    let results: Vec<LookupResult> = report
        .trie
        .batch_lookup(&args.queries, &config)
        .into_iter()
        .zip(&args.queries)
        .map(|(found, query)| LookupResult::new(query.as_bytes(), found, None))
        .collect();

    output_result("Lookup results", &results, cli_args)
}

/// Read whitespace-separated queries until end of input.
fn query_loop(args: &QueryArgs, cli_args: &LexTrieArgs) -> Result<()> {
    let config = resolve_config(cli_args, &args.search)?;
    let report = load_word_list(&args.word_list)?;
    if cli_args.verbosity() > 0 {
        eprintln!(
            "Loaded {} words in {} ms",
            report.words_inserted,
            report.elapsed.as_millis()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let format = cli_args.output_format;
    let answered = match &args.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            run_queries(&report.trie, reader, &mut out, &config, args.timing, format)?
        }
        None => {
            let stdin = io::stdin();
            run_queries(&report.trie, stdin.lock(), &mut out, &config, args.timing, format)?
        }
    };

    info!("Answered {answered} queries");
    Ok(())
}

/// Answer each whitespace-separated token from `reader`, writing one line per
/// token to `writer` as soon as it is answered. Returns the number of queries.
///
/// Input is split on ASCII whitespace and tokens are looked up as raw bytes,
/// so input that is not valid UTF-8 is answered like any other.
pub fn run_queries<R: BufRead, W: Write>(
    trie: &Trie,
    mut reader: R,
    writer: &mut W,
    config: &FuzzyConfig,
    timing: bool,
    format: OutputFormat,
) -> Result<usize> {
    let mut answered = 0;
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let tokens = line
            .split(|byte| byte.is_ascii_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let start = Instant::now();
            let found = trie.nearest_with(token, config);
            let elapsed_us = timing.then(|| start.elapsed().as_micros() as u64);

            write_lookup(writer, &LookupResult::new(token, found, elapsed_us), format)?;
            answered += 1;
        }
        writer.flush()?;
    }

    Ok(answered)
}

/// Check every word of the list with exact lookup.
fn verify(args: &VerifyArgs, cli_args: &LexTrieArgs) -> Result<()> {
    let words = read_word_list(&args.word_list)?;
    let trie: Trie = words.iter().collect();
    debug!("Verifying {} words against {} nodes", words.len(), trie.node_count());

    let result = verify_words(&trie, &words, args.max_report);
    let missing_count = result.missing_count;
    output_result("Verification completed", &result, cli_args)?;

    if missing_count > 0 {
        return Err(LexTrieError::verification(format!(
            "{missing_count} of {} words not found",
            words.len()
        )));
    }
    Ok(())
}

/// Run `contains` for every word in parallel and collect the failures.
///
/// At most `max_report` missing words are listed; `missing_count` is exact.
pub fn verify_words<W: AsRef<[u8]> + Sync>(
    trie: &Trie,
    words: &[W],
    max_report: usize,
) -> VerifyResult {
    let start = Instant::now();

    let missing: Vec<String> = words
        .par_iter()
        .filter(|word| !trie.contains(word))
        .map(|word| String::from_utf8_lossy(word.as_ref()).into_owned())
        .collect();

    for word in missing.iter().take(max_report) {
        warn!("Word not found after insert: {word:?}");
    }

    let missing_count = missing.len();
    VerifyResult {
        words_checked: words.len(),
        missing_count,
        missing: missing.into_iter().take(max_report).collect(),
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Show trie statistics.
fn show_stats(args: &StatsArgs, cli_args: &LexTrieArgs) -> Result<()> {
    let report = load_word_list(&args.word_list)?;
    let stats = report.trie.stats();

    if cli_args.verbosity() > 1 {
        eprintln!("Estimated heap usage: {}", format_bytes(stats.heap_bytes as u64));
    }

    let result = StatsResult {
        path: args.word_list.to_string_lossy().to_string(),
        lines_read: report.lines_read,
        duplicates: report.duplicates,
        load_ms: report.elapsed.as_millis() as u64,
        trie: stats,
    };

    output_result("Trie statistics", &result, cli_args)
}
