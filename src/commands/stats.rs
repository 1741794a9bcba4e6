//! Show the merged statistics of test reports

use crate::commands::utils::{read_merged_counts, StdinOverride};
use crate::commands::Command;
use crate::error::Result;
use crate::stats::Statistics;
use crate::ui::UI;
use std::cell::RefCell;
use std::io::Read;

pub struct StatsCommand {
    base_path: Option<String>,
    files: Vec<String>,
    stdin: StdinOverride,
}

impl StatsCommand {
    pub fn new(base_path: Option<String>, files: Vec<String>) -> Self {
        StatsCommand {
            base_path,
            files,
            stdin: RefCell::new(None),
        }
    }

    /// Read `-` from `input` instead of standard input
    pub fn with_input(self, input: Box<dyn Read>) -> Self {
        *self.stdin.borrow_mut() = Some(input);
        self
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let merged = read_merged_counts(self.base_path.as_deref(), &self.files, &self.stdin)?;
        let stats = Statistics::from_raw(&merged);

        ui.output(&serde_json::to_string_pretty(&stats)?)?;
        Ok(0)
    }

    fn name(&self) -> &str {
        "stats"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::utils::parse_reference;
    use crate::ui::test_ui::TestUI;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_stats_command_empty_input() {
        let mut ui = TestUI::new();
        let cmd = StatsCommand::new(None, vec![]).with_input(Box::new(Cursor::new(b"{}".to_vec())));

        assert_eq!(cmd.execute(&mut ui).unwrap(), 0);
        assert_eq!(ui.output.len(), 1);
        let stats: Statistics = serde_json::from_str(&ui.output[0]).unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_stats_command_merges_reports() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("gloo.json"),
            r#"{"files": 1, "suites": 2, "suite_time": 10.4, "tests": 5, "tests_skipped": 1,
                "tests_failures": 1, "tests_errors": 0, "commit": "abc"}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("mpi.json"),
            r#"{"files": 1, "suites": 1, "suite_time": 2.0, "tests": 3, "tests_skipped": 0,
                "tests_failures": 0, "tests_errors": 1}"#,
        )
        .unwrap();

        let mut ui = TestUI::new();
        let cmd = StatsCommand::new(
            Some(temp.path().to_string_lossy().to_string()),
            vec!["gloo.json".to_string(), "mpi.json".to_string()],
        );
        assert_eq!(cmd.execute(&mut ui).unwrap(), 0);

        let stats: Statistics = serde_json::from_str(&ui.output[0]).unwrap();
        assert_eq!(stats.files, Some(2));
        assert_eq!(stats.suites, Some(3));
        assert_eq!(stats.duration, Some(12));
        assert_eq!(stats.tests, Some(8));
        assert_eq!(stats.tests_succ, Some(5));
        assert_eq!(stats.runs, None);
        assert_eq!(stats.commit.as_deref(), Some("abc"));
    }

    #[test]
    fn test_stats_output_is_a_valid_reference() {
        let mut ui = TestUI::new();
        let input = r#"{"tests": 4, "tests_skipped": 0, "tests_failures": 0, "tests_errors": 0}"#;
        let cmd =
            StatsCommand::new(None, vec![]).with_input(Box::new(Cursor::new(input.as_bytes().to_vec())));
        cmd.execute(&mut ui).unwrap();

        let reference = parse_reference(&ui.output[0], "stats").unwrap();
        assert_eq!(reference.tests_succ, Some(4));
    }
}
