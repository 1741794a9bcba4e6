//! Test statistics data structures
//!
//! A report parser produces one [`RawCounts`] per report file. Several of
//! them are merged and normalized into a single [`Statistics`] record, which
//! can then be compared against a reference run (see [`delta`]).

use serde::{Deserialize, Serialize};

pub mod delta;

pub use delta::{CountDelta, DurationDelta, StatCount, StatDuration, StatisticsWithDelta};

/// Counts parsed from one test report.
///
/// Every field is optional: a missing field means the parser could not tell,
/// which is different from zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCounts {
    /// Number of report files.
    pub files: Option<i64>,
    /// Number of test suites.
    pub suites: Option<i64>,
    /// Summed suite durations, in seconds.
    pub suite_time: Option<f64>,

    /// Test executions as counted by the suites.
    pub suite_tests: Option<i64>,
    pub suite_skipped: Option<i64>,
    pub suite_failures: Option<i64>,
    pub suite_errors: Option<i64>,

    /// Distinct test cases.
    pub tests: Option<i64>,
    pub tests_skipped: Option<i64>,
    pub tests_failures: Option<i64>,
    pub tests_errors: Option<i64>,

    /// Commit the report was produced for.
    pub commit: Option<String>,
}

/// Sum two optional counts; unknown wins.
fn sum<T: std::ops::Add<Output = T>>(a: Option<T>, b: Option<T>) -> Option<T> {
    Some(a? + b?)
}

impl RawCounts {
    /// Merge the counts of several reports into one.
    ///
    /// A field that is unknown in any report is unknown in the result, since
    /// a partial sum would understate the total. The commit is the first one
    /// any report names. Merging nothing yields all-unknown counts.
    pub fn merge<'a>(reports: impl IntoIterator<Item = &'a RawCounts>) -> RawCounts {
        let mut iter = reports.into_iter();
        let Some(first) = iter.next() else {
            return RawCounts::default();
        };

        let mut merged = first.clone();
        let mut count = 1;
        for report in iter {
            merged = RawCounts {
                files: sum(merged.files, report.files),
                suites: sum(merged.suites, report.suites),
                suite_time: sum(merged.suite_time, report.suite_time),
                suite_tests: sum(merged.suite_tests, report.suite_tests),
                suite_skipped: sum(merged.suite_skipped, report.suite_skipped),
                suite_failures: sum(merged.suite_failures, report.suite_failures),
                suite_errors: sum(merged.suite_errors, report.suite_errors),
                tests: sum(merged.tests, report.tests),
                tests_skipped: sum(merged.tests_skipped, report.tests_skipped),
                tests_failures: sum(merged.tests_failures, report.tests_failures),
                tests_errors: sum(merged.tests_errors, report.tests_errors),
                commit: merged.commit.or_else(|| report.commit.clone()),
            };
            count += 1;
        }

        log::debug!("Merged counts of {} reports", count);
        merged
    }
}

/// Normalized statistics of a set of test reports.
///
/// `tests_*` fields count distinct test cases, `runs_*` fields count test
/// executions, where a test case re-run in several suites counts once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Statistics {
    pub files: Option<i64>,
    pub suites: Option<i64>,
    /// Whole seconds.
    pub duration: Option<i64>,

    pub tests: Option<i64>,
    pub tests_succ: Option<i64>,
    pub tests_skip: Option<i64>,
    pub tests_fail: Option<i64>,
    pub tests_error: Option<i64>,

    pub runs: Option<i64>,
    pub runs_succ: Option<i64>,
    pub runs_skip: Option<i64>,
    pub runs_fail: Option<i64>,
    pub runs_error: Option<i64>,

    pub commit: Option<String>,
}

/// Successful count of a granularity, known whenever the total is.
///
/// Unknown skip, fail or error counts subtract nothing; they stay unknown in
/// the statistics themselves.
fn succeeded(
    total: Option<i64>,
    skip: Option<i64>,
    fail: Option<i64>,
    error: Option<i64>,
) -> Option<i64> {
    let total = total?;
    let unsuccessful: i64 = [skip, fail, error].into_iter().flatten().sum();
    let succ = total - unsuccessful;
    if succ < 0 {
        log::warn!(
            "Inconsistent counts: {} total but {} skipped, failed or errored",
            total,
            unsuccessful
        );
    }
    Some(succ)
}

impl Statistics {
    /// Normalize the counts of a report (or a merge of reports).
    pub fn from_raw(raw: &RawCounts) -> Statistics {
        let stats = Statistics {
            files: raw.files,
            suites: raw.suites,
            duration: raw.suite_time.map(|secs| secs.round() as i64),

            tests: raw.tests,
            tests_succ: succeeded(
                raw.tests,
                raw.tests_skipped,
                raw.tests_failures,
                raw.tests_errors,
            ),
            tests_skip: raw.tests_skipped,
            tests_fail: raw.tests_failures,
            tests_error: raw.tests_errors,

            runs: raw.suite_tests,
            runs_succ: succeeded(
                raw.suite_tests,
                raw.suite_skipped,
                raw.suite_failures,
                raw.suite_errors,
            ),
            runs_skip: raw.suite_skipped,
            runs_fail: raw.suite_failures,
            runs_error: raw.suite_errors,

            commit: raw.commit.clone(),
        };
        log::debug!("Normalized statistics: {:?}", stats);
        stats
    }
}
