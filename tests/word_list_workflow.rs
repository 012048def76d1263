use std::io::{Cursor, Write};

use lextrie::cli::{OutputFormat, run_queries, verify_words};
use lextrie::error::Result;
use lextrie::spelling::dictionary::{load_trie_from_file, read_word_list};
use lextrie::trie::FuzzyConfig;
use tempfile::NamedTempFile;

fn write_word_list(words: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for word in words {
        // CRLF line endings, as word lists produced on Windows have.
        write!(file, "{word}\r\n").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn load_verify_and_query() -> Result<()> {
    let file = write_word_list(&["cat", "cats", "cot", "dog", "kitten", "cat"]);

    let report = load_trie_from_file(file.path())?;
    assert_eq!(report.lines_read, 6);
    assert_eq!(report.words_inserted, 5);
    assert_eq!(report.duplicates, 1);

    let words = read_word_list(file.path())?;
    let result = verify_words(&report.trie, &words, 10);
    assert_eq!(result.words_checked, 6);
    assert_eq!(result.missing_count, 0);

    let mut out = Vec::new();
    let answered = run_queries(
        &report.trie,
        Cursor::new("cab sitting\nzzzzzzzzzz\n"),
        &mut out,
        &FuzzyConfig::default(),
        false,
        OutputFormat::Human,
    )?;
    assert_eq!(answered, 3);
    assert_eq!(String::from_utf8(out).unwrap(), "cat\nkitten\n\n");
    Ok(())
}

#[test]
fn timing_is_reported_when_requested() -> Result<()> {
    let file = write_word_list(&["alpha", "beta"]);
    let report = load_trie_from_file(file.path())?;

    let mut out = Vec::new();
    run_queries(
        &report.trie,
        Cursor::new("alpah"),
        &mut out,
        &FuzzyConfig::default(),
        true,
        OutputFormat::Human,
    )?;

    let line = String::from_utf8(out).unwrap();
    assert!(line.starts_with("alpha ("), "unexpected output {line:?}");
    assert!(line.trim_end().ends_with("us)"));
    Ok(())
}
