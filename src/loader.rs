//! Line-delimited JSON loading.
//!
//! The loader is the only stage that touches the input file and the only
//! stage with an error-recovery policy: a line that does not parse as a
//! record is skipped and the run continues. Skips are traced at debug
//! level for observability only; no count is surfaced to the caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::PrepError;

/// One parsed log entry: an arbitrary-depth mapping of string keys to
/// scalars, lists, or nested mappings. Key order is preserved.
pub type Record = serde_json::Map<String, Value>;

/// Read entries from a line-delimited JSON file, skipping lines that fail
/// to deserialize as `T`. Blank lines are skipped the same way. Entry
/// order is file order minus dropped lines.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PrepError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut entries = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                debug!(line = line_index + 1, %error, "skipping unparseable line");
            }
        }
    }
    Ok(entries)
}

/// Read log records from a line-delimited JSON file.
///
/// A line holding valid JSON that is not an object is not a record and is
/// skipped like a malformed line.
pub fn read_records(path: &Path) -> Result<Vec<Record>, PrepError> {
    read_jsonl(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_lines(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        for line in lines {
            writeln!(file, "{line}").expect("write line");
        }
        file
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Entry {
        name: String,
        value: i64,
    }

    #[test]
    fn reads_typed_entries_in_file_order() {
        let file = write_lines(&[
            r#"{"name": "a", "value": 1}"#,
            r#"{"name": "b", "value": 2}"#,
        ]);
        let entries: Vec<Entry> = read_jsonl(file.path()).expect("read");
        assert_eq!(
            entries,
            vec![
                Entry { name: "a".into(), value: 1 },
                Entry { name: "b".into(), value: 2 },
            ]
        );
    }

    #[test]
    fn skips_malformed_blank_and_non_object_lines() {
        let file = write_lines(&[
            r#"{"description": "ok"}"#,
            "not json at all",
            "",
            "42",
            "[1, 2]",
            r#"{"description": "also ok"}"#,
        ]);
        let records = read_records(file.path()).expect("read");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("description"),
            Some(&serde_json::json!("ok"))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_records(Path::new("/nonexistent/records.jsonl"));
        assert!(matches!(result, Err(PrepError::Io(_))));
    }
}
