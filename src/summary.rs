//! Markdown summaries of test statistics
//!
//! Rendering happens in two passes. First the shared [`Widths`] of every
//! alignment group are computed from all cells of that group, then each cell
//! is printed with its group's widths. In the long summary the groups run
//! down the columns, so counts and bracketed deltas line up across lines.

use crate::format::digits::group_widths;
use crate::format::{format_count, format_duration, FormattingContext, Widths};
use crate::stats::{StatCount, StatisticsWithDelta};

/// Title line of the long summary.
pub const HEADER: &str = "## Unit Test Results";

pub const SUCCESS_ICON: &str = ":heavy_check_mark:";
pub const SKIPPED_ICON: &str = ":zzz:";
pub const FAILED_ICON: &str = ":heavy_multiplication_x:";
pub const ERROR_ICON: &str = ":fire:";
pub const DURATION_ICON: &str = ":stopwatch:";

/// Number of characters of the reference commit shown in the footnote.
const COMMIT_PREFIX: usize = 8;

// `files` and `runs` are padded to the width of `tests`.
const FILES_LABEL: &str = "files ";
const SUITES_LABEL: &str = "suites";
const TESTS_LABEL: &str = "tests";
const RUNS_LABEL: &str = "runs ";

/// The five cells of one granularity: total, succ, skip, fail, error.
fn status_cells<'a>(
    total: &'a StatCount,
    label: &'a str,
    succ: &'a StatCount,
    skip: &'a StatCount,
    fail: &'a StatCount,
    error: &'a StatCount,
) -> [(&'a StatCount, &'a str); 5] {
    [
        (total, label),
        (succ, SUCCESS_ICON),
        (skip, SKIPPED_ICON),
        (fail, FAILED_ICON),
        (error, ERROR_ICON),
    ]
}

fn tests_cells(stats: &StatisticsWithDelta) -> [(&StatCount, &str); 5] {
    status_cells(
        &stats.tests,
        TESTS_LABEL,
        &stats.tests_succ,
        &stats.tests_skip,
        &stats.tests_fail,
        &stats.tests_error,
    )
}

fn runs_cells(stats: &StatisticsWithDelta) -> [(&StatCount, &str); 5] {
    status_cells(
        &stats.runs,
        RUNS_LABEL,
        &stats.runs_succ,
        &stats.runs_skip,
        &stats.runs_fail,
        &stats.runs_error,
    )
}

fn render_cell(
    (value, label): (&StatCount, &str),
    widths: Widths,
    ctx: &FormattingContext,
) -> String {
    format_count(value, widths.number, widths.delta, label, ctx)
}

/// Render the one-line summary of test case counts.
///
/// All five cells share one set of widths.
pub fn short_summary(stats: &StatisticsWithDelta, ctx: &FormattingContext) -> String {
    let cells = tests_cells(stats);
    let widths = group_widths(cells.iter().map(|(value, _)| *value), ctx);

    cells
        .into_iter()
        .map(|cell| render_cell(cell, widths, ctx))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the multi-line summary with files, test cases and test runs.
///
/// A footnote naming the reference commit is appended when the statistics
/// were compared against one.
pub fn long_summary(stats: &StatisticsWithDelta, ctx: &FormattingContext) -> String {
    let tests = tests_cells(stats);
    let runs = runs_cells(stats);

    // First column: files, tests and runs totals.
    let totals = group_widths([&stats.files, &stats.tests, &stats.runs], ctx);
    let suites = group_widths([&stats.suites], ctx);
    let columns: Vec<Widths> = std::iter::once(totals)
        .chain(
            tests
                .iter()
                .zip(runs.iter())
                .skip(1)
                .map(|((test, _), (run, _))| group_widths([*test, *run], ctx)),
        )
        .collect();

    let misc_line = [
        render_cell((&stats.files, FILES_LABEL), totals, ctx),
        render_cell((&stats.suites, SUITES_LABEL), suites, ctx),
        format_duration(&stats.duration, Some(DURATION_ICON)),
    ]
    .join(" ");

    let status_line = |cells: [(&StatCount, &str); 5]| {
        cells
            .into_iter()
            .zip(columns.iter())
            .map(|(cell, widths)| render_cell(cell, *widths, ctx))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut md = format!(
        "{}\n{}\n{}\n{}\n",
        HEADER,
        misc_line,
        status_line(tests),
        status_line(runs)
    );

    if let Some(commit) = &stats.reference_commit {
        md.push('\n');
        md.push_str(&footnote(stats.reference_type.as_deref(), commit));
    }

    md
}

fn footnote(reference_type: Option<&str>, commit: &str) -> String {
    let prefix: String = commit.chars().take(COMMIT_PREFIX).collect();
    match reference_type {
        Some(reference_type) => format!(
            "[±] comparison w.r.t. {} commit {}",
            reference_type, prefix
        ),
        None => format!("[±] comparison w.r.t. commit {}", prefix),
    }
}
