//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexTrieArgs, OutputFormat};
use crate::error::Result;
use crate::trie::{FuzzyMatch, TrieStats};

/// Result of one fuzzy lookup, decoded for display.
///
/// Query and word are converted lossily from bytes here and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    /// Matched word, empty when nothing qualified.
    pub word: String,
    pub distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LookupResult {
    /// Build a result from a lookup outcome.
    pub fn new(query: &[u8], found: Option<FuzzyMatch>, elapsed_us: Option<u64>) -> Self {
        let (word, distance) = match found {
            Some(found) => (found.word_lossy().into_owned(), Some(found.distance)),
            None => (String::new(), None),
        };
        LookupResult {
            query: String::from_utf8_lossy(query).into_owned(),
            word,
            distance,
            elapsed_us,
        }
    }
}

/// Result of exact verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResult {
    pub words_checked: usize,
    pub missing_count: usize,
    pub missing: Vec<String>,
    pub duration_ms: u64,
}

/// Trie statistics together with load figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResult {
    pub path: String,
    pub lines_read: usize,
    pub duplicates: usize,
    pub load_ms: u64,
    #[serde(flatten)]
    pub trie: TrieStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexTrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Write one lookup result as a single line.
///
/// Used by the query loop, which streams results as queries arrive. JSON
/// output is one object per line regardless of `--pretty`.
pub fn write_lookup<W: Write>(
    writer: &mut W,
    result: &LookupResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Human => match result.elapsed_us {
            Some(us) => writeln!(writer, "{} ({us} us)", result.word)?,
            None => writeln!(writer, "{}", result.word)?,
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, result)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexTrieArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    output_generic_human(&value);
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                output_generic_human(item);
                println!();
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexTrieArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}

/// Format bytes into human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
