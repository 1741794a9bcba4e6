//! unit-test-summary - Markdown summaries of unit test results
//!
//! Aggregates the counts of one or more parsed test reports into a single
//! statistics record, optionally compares it against a reference run, and
//! renders the result as Markdown for a CI status comment.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`stats`]: Raw report counts, normalized statistics and deltas to a reference run
//! - [`format`]: Locale-aware digit grouping, column widths and delta rendering
//! - [`summary`]: Short and long Markdown summaries
//! - [`commands`]: User-facing commands (summary, stats)
//! - [`config`]: .summary.conf configuration file parsing
//! - [`ui`]: User interface abstraction for output
//! - [`error`]: Error types and Result alias
//!
//! Reading report files is left to an external parser; this crate consumes
//! its counts as [`stats::RawCounts`].
//!
//! # Example
//!
//! ```
//! use unit_test_summary::format::FormattingContext;
//! use unit_test_summary::stats::{RawCounts, Statistics, StatisticsWithDelta};
//! use unit_test_summary::summary::{long_summary, short_summary};
//!
//! let current = Statistics::from_raw(&RawCounts {
//!     tests: Some(1234),
//!     tests_skipped: Some(4),
//!     tests_failures: Some(0),
//!     tests_errors: Some(0),
//!     ..Default::default()
//! });
//! let reference = Statistics {
//!     tests: Some(1200),
//!     commit: Some("0123456789abcdef".to_string()),
//!     ..Default::default()
//! };
//!
//! let stats = StatisticsWithDelta::compare(&current, Some(&reference), "ancestor");
//! let ctx = FormattingContext::with_separator(',');
//!
//! assert_eq!(
//!     short_summary(&stats, &ctx),
//!     "1,234 tests [+34] 1,230 :heavy_check_mark:     4 :zzz:     0 :heavy_multiplication_x:     0 :fire:"
//! );
//! assert!(long_summary(&stats, &ctx).ends_with("comparison w.r.t. ancestor commit 01234567"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod stats;
pub mod summary;
pub mod ui;

pub use error::{Error, Result};
