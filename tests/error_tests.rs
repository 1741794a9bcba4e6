//! Error path testing
//!
//! This module tests error handling in various failure scenarios to ensure
//! the application properly handles and reports errors.

use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use unit_test_summary::commands::{Command, StatsCommand, SummaryCommand};
use unit_test_summary::config::CONFIG_FILE;
use unit_test_summary::error::{Error, Result};
use unit_test_summary::ui::UI;

// Test UI implementation
struct TestUI {
    pub output: Vec<String>,
    pub errors: Vec<String>,
}

impl TestUI {
    fn new() -> Self {
        TestUI {
            output: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl UI for TestUI {
    fn output(&mut self, message: &str) -> Result<()> {
        self.output.push(message.to_string());
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.errors.push(format!("Warning: {}", message));
        Ok(())
    }
}

fn setup_report() -> (TempDir, String) {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("report.json"),
        r#"{"files": 1, "tests": 3, "tests_skipped": 0, "tests_failures": 0, "tests_errors": 0}"#,
    )
    .unwrap();
    let base = temp.path().to_string_lossy().to_string();
    (temp, base)
}

#[test]
fn test_summary_unsupported_locale() {
    let (_temp, base) = setup_report();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()])
        .with_locale("xx_YY".to_string());
    let result = cmd.execute(&mut ui);

    assert!(matches!(result, Err(Error::UnsupportedLocale(_))));
    assert!(ui.output.is_empty());
}

#[test]
fn test_summary_malformed_locale() {
    let (_temp, base) = setup_report();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()])
        .with_locale("1234".to_string());
    let err = cmd.execute(&mut ui).unwrap_err();

    assert!(err.to_string().contains("1234"));
}

#[test]
fn test_summary_invalid_json_input() {
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(None, vec![])
        .with_input(Box::new(Cursor::new(b"not json".to_vec())));
    let result = cmd.execute(&mut ui);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(ui.output.is_empty());
}

#[test]
fn test_stats_rejects_unknown_fields() {
    let mut ui = TestUI::new();

    let cmd = StatsCommand::new(None, vec![])
        .with_input(Box::new(Cursor::new(br#"{"passed": 3}"#.to_vec())));
    let err = cmd.execute(&mut ui).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("passed"));
}

#[test]
fn test_stats_missing_file() {
    let temp = TempDir::new().unwrap();
    let mut ui = TestUI::new();

    let cmd = StatsCommand::new(
        Some(temp.path().to_string_lossy().to_string()),
        vec!["absent.json".to_string()],
    );
    let result = cmd.execute(&mut ui);

    assert!(result.is_err());
    let err_msg = format!("{}", result.unwrap_err());
    assert!(err_msg.contains("absent.json"));
}

#[test]
fn test_summary_missing_reference_file() {
    let (_temp, base) = setup_report();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()])
        .with_reference("gone.json".to_string(), None);
    let result = cmd.execute(&mut ui);

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_summary_unrecognized_reference() {
    let (temp, base) = setup_report();
    fs::write(temp.path().join("odd.json"), r#"{"results": []}"#).unwrap();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()])
        .with_reference("odd.json".to_string(), Some("ancestor".to_string()));
    let err = cmd.execute(&mut ui).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("odd.json"));
}

#[test]
fn test_config_with_unknown_format() {
    let (temp, base) = setup_report();
    fs::write(temp.path().join(CONFIG_FILE), "[DEFAULT]\nformat=wide\n").unwrap();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()]);
    let err = cmd.execute(&mut ui).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("wide"));
}

#[test]
fn test_config_without_default_section() {
    let (temp, base) = setup_report();
    fs::write(temp.path().join(CONFIG_FILE), "[settings]\nformat=short\n").unwrap();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()]);
    let result = cmd.execute(&mut ui);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_config_with_unsupported_locale() {
    let (temp, base) = setup_report();
    fs::write(temp.path().join(CONFIG_FILE), "[DEFAULT]\nlocale=xx_YY\n").unwrap();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()]);
    let result = cmd.execute(&mut ui);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_explicit_config_file_missing() {
    let (_temp, base) = setup_report();
    let mut ui = TestUI::new();

    let cmd = SummaryCommand::new(Some(base), vec!["report.json".to_string()])
        .with_config("elsewhere.conf".to_string());
    let err = cmd.execute(&mut ui).unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("elsewhere.conf"));
}
