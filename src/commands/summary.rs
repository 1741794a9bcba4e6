//! Render the Markdown summary of test results

use crate::commands::utils::{
    load_config, parse_reference, read_document, read_merged_counts, StdinOverride, STDIN,
};
use crate::commands::Command;
use crate::config::{SummaryConfig, SummaryFormat};
use crate::error::{Error, Result};
use crate::format::FormattingContext;
use crate::stats::{Statistics, StatisticsWithDelta};
use crate::summary::{long_summary, short_summary};
use crate::ui::UI;
use std::cell::RefCell;
use std::io::Read;

/// Label passed on when no reference run was given.
pub const MISSING_REFERENCE: &str = "missing";

/// Label used for a given reference run when neither flag nor config names one.
pub const DEFAULT_REFERENCE_TYPE: &str = "reference";

pub struct SummaryCommand {
    base_path: Option<String>,
    files: Vec<String>,
    reference: Option<String>,
    reference_type: Option<String>,
    format: Option<SummaryFormat>,
    locale: Option<String>,
    ambient_locale: Option<String>,
    config_path: Option<String>,
    stdin: StdinOverride,
}

impl SummaryCommand {
    pub fn new(base_path: Option<String>, files: Vec<String>) -> Self {
        SummaryCommand {
            base_path,
            files,
            reference: None,
            reference_type: None,
            format: None,
            locale: None,
            ambient_locale: None,
            config_path: None,
            stdin: RefCell::new(None),
        }
    }

    /// Compare against the reference run stored in `path`
    pub fn with_reference(mut self, path: String, reference_type: Option<String>) -> Self {
        self.reference = Some(path);
        self.reference_type = reference_type;
        self
    }

    pub fn with_format(mut self, format: SummaryFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_locale(mut self, locale: String) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Locale taken from the environment rather than asked for.
    ///
    /// Used only when neither `with_locale` nor the configuration names one,
    /// and an unsupported name falls back to no grouping.
    pub fn with_ambient_locale(mut self, locale: String) -> Self {
        self.ambient_locale = Some(locale);
        self
    }

    pub fn with_config(mut self, config_path: String) -> Self {
        self.config_path = Some(config_path);
        self
    }

    /// Read `-` from `input` instead of standard input
    pub fn with_input(self, input: Box<dyn Read>) -> Self {
        *self.stdin.borrow_mut() = Some(input);
        self
    }
}

impl SummaryCommand {
    /// Whether the reports are read from standard input
    fn reads_stdin(&self) -> bool {
        self.files.is_empty() || self.files.iter().any(|file| file == STDIN)
    }

    /// Grouping from `--locale`, then the configuration, then the environment
    fn formatting_context(&self, config: &SummaryConfig) -> Result<FormattingContext> {
        if let Some(locale) = &self.locale {
            return FormattingContext::from_locale(locale);
        }
        if config.locale.is_some() {
            return config.formatting_context();
        }
        match &self.ambient_locale {
            Some(locale) => Ok(FormattingContext::from_locale(locale).unwrap_or_else(|e| {
                log::warn!("Ignoring environment locale, not grouping digits: {}", e);
                FormattingContext::plain()
            })),
            None => Ok(FormattingContext::plain()),
        }
    }
}

impl Command for SummaryCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let base = self.base_path.as_deref();
        let config = load_config(base, self.config_path.as_deref())?;

        let ctx = self.formatting_context(&config)?;

        if self.reference.as_deref() == Some(STDIN) && self.reads_stdin() {
            return Err(Error::Config(
                "Cannot read both the reports and the reference from standard input".to_string(),
            ));
        }

        let current = Statistics::from_raw(&read_merged_counts(base, &self.files, &self.stdin)?);

        let reference = self
            .reference
            .as_deref()
            .map(|file| parse_reference(&read_document(base, file, &self.stdin)?, file))
            .transpose()?;

        let reference_type = match &reference {
            Some(_) => self
                .reference_type
                .as_deref()
                .or(config.reference_type.as_deref())
                .unwrap_or(DEFAULT_REFERENCE_TYPE),
            None => MISSING_REFERENCE,
        };

        if reference.as_ref().is_some_and(|r| r.commit.is_none()) {
            ui.warning("Reference run names no commit, omitting the comparison footnote")?;
        }

        let stats = StatisticsWithDelta::compare(&current, reference.as_ref(), reference_type);
        let format = self.format.unwrap_or(config.format);
        log::debug!("Rendering the {} summary", format);
        let markdown = match format {
            SummaryFormat::Long => long_summary(&stats, &ctx),
            SummaryFormat::Short => short_summary(&stats, &ctx),
        };

        ui.output(markdown.trim_end_matches('\n'))?;
        Ok(0)
    }

    fn name(&self) -> &str {
        "summary"
    }
}
