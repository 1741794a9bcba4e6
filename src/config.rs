//! Configuration file (.summary.conf) parsing and handling
//!
//! The .summary.conf file uses INI format with a [DEFAULT] section holding
//! the defaults for rendering summaries. Command-line options override it.

use crate::error::{Error, Result};
use crate::format::FormattingContext;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".summary.conf";

/// Which Markdown summary to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Header, files line, tests line and runs line.
    #[default]
    Long,
    /// Single line of test case counts.
    Short,
}

impl FromStr for SummaryFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "long" => Ok(SummaryFormat::Long),
            "short" => Ok(SummaryFormat::Short),
            other => Err(Error::Config(format!(
                "Unknown summary format '{}', expected 'long' or 'short'",
                other
            ))),
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryFormat::Long => write!(f, "long"),
            SummaryFormat::Short => write!(f, "short"),
        }
    }
}

/// Configuration loaded from .summary.conf
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryConfig {
    /// Locale whose digit grouping is used, e.g. `en_US.UTF-8`
    pub locale: Option<String>,

    /// Label describing how reference runs are chosen
    pub reference_type: Option<String>,

    /// Summary to render when none is requested explicitly
    pub format: SummaryFormat,
}

impl SummaryConfig {
    /// Load configuration from a .summary.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::parse(&contents)
    }

    /// Load `.summary.conf` from `dir` if there is one
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            log::debug!("Loading configuration from {}", path.display());
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        // Parse as INI format
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        // Extract DEFAULT section
        let default = ini
            .get("DEFAULT")
            .ok_or_else(|| Error::Config(format!("No [DEFAULT] section in {}", CONFIG_FILE)))?;

        let config = SummaryConfig {
            locale: default.get("locale").cloned(),
            reference_type: default
                .get("reference_type")
                .filter(|label| !label.trim().is_empty())
                .cloned(),
            format: default
                .get("format")
                .map(|format| format.parse::<SummaryFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        // Validate the locale now rather than at render time
        if let Some(locale) = &config.locale {
            FormattingContext::from_locale(locale)
                .map_err(|e| Error::Config(format!("Invalid locale option: {}", e)))?;
        }

        Ok(config)
    }

    /// Formatting context for the configured locale
    pub fn formatting_context(&self) -> Result<FormattingContext> {
        match &self.locale {
            Some(locale) => FormattingContext::from_locale(locale),
            None => Ok(FormattingContext::plain()),
        }
    }
}
