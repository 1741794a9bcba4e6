//! Test utilities for UI testing

use crate::error::Result;
use crate::ui::UI;

/// A UI implementation for testing that captures output in vectors
pub struct TestUI {
    pub output: Vec<String>,
    pub errors: Vec<String>,
}

impl TestUI {
    pub fn new() -> Self {
        TestUI {
            output: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// All captured output, one message per line
    pub fn markdown(&self) -> String {
        self.output.join("\n")
    }
}

impl Default for TestUI {
    fn default() -> Self {
        Self::new()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_joins_messages() {
        let mut ui = TestUI::new();
        ui.output("## Unit Test Results").unwrap();
        ui.output("1 files").unwrap();
        assert_eq!(ui.markdown(), "## Unit Test Results\n1 files");
    }

    #[test]
    fn test_warning_is_prefixed() {
        let mut ui = TestUI::new();
        ui.warning("no commit").unwrap();
        assert_eq!(ui.errors, vec!["Warning: no commit"]);
        assert!(ui.output.is_empty());
    }
}
