//! Utility functions for command implementation

use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::stats::{RawCounts, Statistics};
use serde::Deserialize;
use std::cell::RefCell;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// File name standing for standard input.
pub const STDIN: &str = "-";

/// Input replacing the process's standard input, for tests and embedding.
pub type StdinOverride = RefCell<Option<Box<dyn Read>>>;

/// Resolve `path` against the base directory (or the current directory if None)
pub fn resolve_path(base_path: Option<&str>, path: &str) -> PathBuf {
    let path = Path::new(path);
    match base_path {
        Some(base) if path.is_relative() => Path::new(base).join(path),
        _ => path.to_path_buf(),
    }
}

/// Load the configuration named on the command line, or discover it in the base directory
pub fn load_config(base_path: Option<&str>, config_path: Option<&str>) -> Result<SummaryConfig> {
    match config_path {
        Some(path) => SummaryConfig::load_from_file(&resolve_path(base_path, path)),
        None => SummaryConfig::discover(Path::new(base_path.unwrap_or("."))),
    }
}

/// Read a whole input document; `-` reads standard input
pub fn read_document(base_path: Option<&str>, file: &str, stdin: &StdinOverride) -> Result<String> {
    let mut contents = String::new();
    if file == STDIN {
        match stdin.borrow_mut().take() {
            Some(mut input) => input.read_to_string(&mut contents)?,
            None => io::stdin().read_to_string(&mut contents)?,
        };
        return Ok(contents);
    }

    let path = resolve_path(base_path, file);
    fs::read_to_string(&path)
        .map_err(|e| Error::Io(io::Error::new(e.kind(), format!("{}: {}", path.display(), e))))
}

/// Parse the raw counts a report parser wrote as JSON
pub fn parse_raw_counts(contents: &str, origin: &str) -> Result<RawCounts> {
    serde_json::from_str(contents)
        .map_err(|e| Error::Parse(format!("Invalid raw counts in {}: {}", origin, e)))
}

/// Read and merge the raw counts of all `files` (standard input when empty)
pub fn read_merged_counts(
    base_path: Option<&str>,
    files: &[String],
    stdin: &StdinOverride,
) -> Result<RawCounts> {
    let stdin_only = [STDIN.to_string()];
    let files = if files.is_empty() { &stdin_only[..] } else { files };

    let reports = files
        .iter()
        .map(|file| parse_raw_counts(&read_document(base_path, file, stdin)?, file))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Read raw counts from {} input(s)", reports.len());
    Ok(RawCounts::merge(&reports))
}

/// A stored reference run: normalized statistics or the raw counts of a report.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReferenceDocument {
    Statistics(Statistics),
    Raw(RawCounts),
}

/// Parse a reference run, accepting both statistics and raw counts JSON
pub fn parse_reference(contents: &str, origin: &str) -> Result<Statistics> {
    let document: ReferenceDocument = serde_json::from_str(contents).map_err(|_| {
        Error::Parse(format!(
            "Reference {} holds neither statistics nor raw counts",
            origin
        ))
    })?;

    Ok(match document {
        ReferenceDocument::Statistics(stats) => stats,
        ReferenceDocument::Raw(raw) => Statistics::from_raw(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_stdin() -> StdinOverride {
        RefCell::new(None)
    }

    fn stdin_of(contents: &str) -> StdinOverride {
        let input: Box<dyn Read> = Box::new(io::Cursor::new(contents.as_bytes().to_vec()));
        RefCell::new(Some(input))
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(resolve_path(None, "a.json"), PathBuf::from("a.json"));
        assert_eq!(
            resolve_path(Some("/base"), "a.json"),
            PathBuf::from("/base/a.json")
        );
        assert_eq!(
            resolve_path(Some("/base"), "/abs/a.json"),
            PathBuf::from("/abs/a.json")
        );
    }

    #[test]
    fn test_read_merged_counts_from_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.json"), r#"{"files": 1, "tests": 3}"#).unwrap();
        fs::write(temp.path().join("b.json"), r#"{"files": 1, "tests": 4}"#).unwrap();

        let base = temp.path().to_string_lossy().to_string();
        let merged = read_merged_counts(
            Some(&base),
            &["a.json".to_string(), "b.json".to_string()],
            &no_stdin(),
        )
        .unwrap();
        assert_eq!(merged.files, Some(2));
        assert_eq!(merged.tests, Some(7));
    }

    #[test]
    fn test_read_merged_counts_from_stdin() {
        let merged = read_merged_counts(None, &[], &stdin_of(r#"{"tests": 5}"#)).unwrap();
        assert_eq!(merged.tests, Some(5));
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().to_string_lossy().to_string();
        let err = read_document(Some(&base), "missing.json", &no_stdin()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_parse_raw_counts_invalid() {
        let err = parse_raw_counts("[1, 2]", "report.json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("report.json"));
    }

    #[test]
    fn test_parse_reference_statistics() {
        let stats = parse_reference(r#"{"tests": 10, "tests_succ": 8, "commit": "ref"}"#, "ref")
            .unwrap();
        assert_eq!(stats.tests, Some(10));
        assert_eq!(stats.tests_succ, Some(8));
        assert_eq!(stats.commit.as_deref(), Some("ref"));
    }

    #[test]
    fn test_parse_reference_raw_counts() {
        let stats = parse_reference(
            r#"{"suite_tests": 10, "suite_skipped": 1, "suite_failures": 2, "suite_errors": 0}"#,
            "ref",
        )
        .unwrap();
        assert_eq!(stats.runs, Some(10));
        assert_eq!(stats.runs_succ, Some(7));
    }

    #[test]
    fn test_parse_reference_rejects_other_documents() {
        let err = parse_reference(r#"{"passed": 10}"#, "ref.json").unwrap_err();
        assert!(err.to_string().contains("ref.json"));
    }
}
