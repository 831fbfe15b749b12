// Post loading — flat JSON file read.
//
// The input file is a JSON array of post objects, typically produced by a
// separate scraper run. The loader is deliberately forgiving: any load
// failure collapses to an empty list with a diagnostic, and individual
// records stay untyped so one malformed entry can't sink the rest.

use std::fs;
use std::path::Path;

use colored::Colorize;
use serde_json::Value;
use tracing::{debug, warn};

/// One post with all the fields classification needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub text: String,
    pub reporter: String,
    pub link: String,
}

impl Post {
    /// Extract a typed post from an untyped record.
    ///
    /// Returns `None` when any of `text`, `reporter`, or `link` is missing
    /// or not a string — the caller skips such records and keeps going.
    pub fn from_record(record: &Value) -> Option<Self> {
        let text = record.get("text")?.as_str()?;
        let reporter = record.get("reporter")?.as_str()?;
        let link = record.get("link")?.as_str()?;
        Some(Self {
            text: text.to_string(),
            reporter: reporter.to_string(),
            link: link.to_string(),
        })
    }
}

/// Load post records from a JSON file.
///
/// Returns the raw array elements, untyped. All failure modes (file absent,
/// invalid JSON, root not an array) are non-fatal: they print a diagnostic
/// and return an empty vec, which the caller treats as "nothing to do".
pub fn load_posts_from_file(path: &Path) -> Vec<Value> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read posts file");
            println!(
                "{} File '{}' not found. Please create it.",
                "Error:".red(),
                path.display()
            );
            return Vec::new();
        }
    };

    let parsed: Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Posts file is not valid JSON");
            println!(
                "{} Could not decode JSON from '{}'. Check its format.",
                "Error:".red(),
                path.display()
            );
            return Vec::new();
        }
    };

    match parsed {
        Value::Array(records) => {
            debug!(count = records.len(), "Loaded post records");
            records
        }
        _ => {
            println!(
                "{} JSON file '{}' does not contain a list.",
                "Error:".red(),
                path.display()
            );
            Vec::new()
        }
    }
}
