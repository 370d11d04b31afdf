//! Loading journal exports.
//!
//! An export is either a bare JSON array of entries or an object with an
//! `entries` array, which is what the journal's backup feature writes.

use crate::error::{CliError, CliResult};
use brewlog_common::CoffeeEntry;
use serde::de::Error as _;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Parses an export from JSON text.
pub fn parse_entries(text: &str) -> serde_json::Result<Vec<CoffeeEntry>> {
    match serde_json::from_str(text)? {
        Value::Array(items) => serde_json::from_value(Value::Array(items)),
        Value::Object(mut object) => match object.remove("entries") {
            Some(entries) => serde_json::from_value(entries),
            None => Err(serde_json::Error::custom(
                "expected an array of entries or an object with an \"entries\" field",
            )),
        },
        _ => Err(serde_json::Error::custom(
            "expected an array of entries or an object with an \"entries\" field",
        )),
    }
}

/// Reads and parses an export; [`STDIN_PATH`] reads standard input.
pub fn load_entries(path: &Path) -> CliResult<Vec<CoffeeEntry>> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::ReadJournal {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadJournal {
            path: path.to_path_buf(),
            source,
        })?
    };

    let entries = parse_entries(&text).map_err(|source| CliError::ParseJournal {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = entries.len(), "loaded journal");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_common::test_utils::journal_fixtures::{sample_journal, sample_journal_json};

    #[test]
    fn test_parse_array() {
        let entries = parse_entries(&sample_journal_json()).unwrap();
        assert_eq!(entries, sample_journal());
    }

    #[test]
    fn test_parse_wrapped_object() {
        let text = format!(r#"{{"version": 1, "entries": {}}}"#, sample_journal_json());
        assert_eq!(parse_entries(&text).unwrap().len(), 3);
    }

    #[test]
    fn test_minimal_entries_load() {
        let entries =
            parse_entries(r#"[{"id": "a", "rating": 4, "tastingDate": "2024-03-01"}]"#).unwrap();
        assert_eq!(entries[0].id.as_str(), "a");
        assert!(entries[0].tags.is_empty());
    }

    #[test]
    fn test_wrong_shapes_are_rejected() {
        assert!(parse_entries(r#"{"items": []}"#).is_err());
        assert!(parse_entries("42").is_err());
        assert!(parse_entries(r#"[{"id": "a"}]"#).is_err());
        assert!(parse_entries("not json").is_err());
    }

    #[test]
    fn test_load_entries_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{").unwrap();

        let err = load_entries(&path).unwrap_err();
        assert!(matches!(err, CliError::ParseJournal { .. }));
        assert!(err.to_string().contains("broken.json"));

        let missing = load_entries(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, CliError::ReadJournal { .. }));
    }
}
