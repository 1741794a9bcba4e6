//! Statistics compared against a reference run

use super::Statistics;

/// A count compared against the same count of a reference run.
///
/// `new` and `gone` are the numbers of test cases introduced or removed
/// relative to the reference, when the caller knows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountDelta {
    pub number: Option<i64>,
    pub delta: Option<i64>,
    pub new: Option<i64>,
    pub gone: Option<i64>,
}

impl CountDelta {
    /// A count with its signed difference to the reference.
    pub fn new(number: Option<i64>, delta: Option<i64>) -> Self {
        CountDelta {
            number,
            delta,
            new: None,
            gone: None,
        }
    }

    pub fn with_new(mut self, new: i64) -> Self {
        self.new = Some(new);
        self
    }

    pub fn with_gone(mut self, gone: i64) -> Self {
        self.gone = Some(gone);
        self
    }
}

/// One count cell of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCount {
    /// A bare count, `None` when unknown.
    Plain(Option<i64>),
    /// A count that was compared against a reference.
    Compared(CountDelta),
}

impl Default for StatCount {
    fn default() -> Self {
        StatCount::Plain(None)
    }
}

impl From<i64> for StatCount {
    fn from(number: i64) -> Self {
        StatCount::Plain(Some(number))
    }
}

impl From<Option<i64>> for StatCount {
    fn from(number: Option<i64>) -> Self {
        StatCount::Plain(number)
    }
}

impl From<CountDelta> for StatCount {
    fn from(delta: CountDelta) -> Self {
        StatCount::Compared(delta)
    }
}

/// A duration compared against the reference run's duration, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationDelta {
    pub duration: Option<i64>,
    pub delta: Option<i64>,
}

/// The duration cell of a summary, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDuration {
    Plain(Option<i64>),
    Compared(DurationDelta),
}

impl Default for StatDuration {
    fn default() -> Self {
        StatDuration::Plain(None)
    }
}

impl From<i64> for StatDuration {
    fn from(seconds: i64) -> Self {
        StatDuration::Plain(Some(seconds))
    }
}

impl From<Option<i64>> for StatDuration {
    fn from(seconds: Option<i64>) -> Self {
        StatDuration::Plain(seconds)
    }
}

impl From<DurationDelta> for StatDuration {
    fn from(delta: DurationDelta) -> Self {
        StatDuration::Compared(delta)
    }
}

/// Statistics ready for rendering, optionally with deltas to a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsWithDelta {
    pub files: StatCount,
    pub suites: StatCount,
    pub duration: StatDuration,

    pub tests: StatCount,
    pub tests_succ: StatCount,
    pub tests_skip: StatCount,
    pub tests_fail: StatCount,
    pub tests_error: StatCount,

    pub runs: StatCount,
    pub runs_succ: StatCount,
    pub runs_skip: StatCount,
    pub runs_fail: StatCount,
    pub runs_error: StatCount,

    /// Commit of the reference run.
    pub reference_commit: Option<String>,
    /// How the reference run was chosen, e.g. `ancestor` or `missing`.
    pub reference_type: Option<String>,
}

fn compare_count(current: Option<i64>, reference: Option<i64>) -> StatCount {
    match (current, reference) {
        (Some(number), Some(reference)) => {
            StatCount::Compared(CountDelta::new(Some(number), Some(number - reference)))
        }
        (current, _) => StatCount::Plain(current),
    }
}

fn compare_duration(current: Option<i64>, reference: Option<i64>) -> StatDuration {
    match (current, reference) {
        (Some(duration), Some(reference)) => StatDuration::Compared(DurationDelta {
            duration: Some(duration),
            delta: Some(duration - reference),
        }),
        (current, _) => StatDuration::Plain(current),
    }
}

impl StatisticsWithDelta {
    /// Compare `current` against an optional `reference` run.
    ///
    /// Fields known in both records carry `current - reference` as delta,
    /// all others stay plain. `reference_type` is kept verbatim, also when
    /// there is no reference at all.
    pub fn compare(
        current: &Statistics,
        reference: Option<&Statistics>,
        reference_type: &str,
    ) -> StatisticsWithDelta {
        let empty = Statistics::default();
        let other = reference.unwrap_or(&empty);

        let stats = StatisticsWithDelta {
            files: compare_count(current.files, other.files),
            suites: compare_count(current.suites, other.suites),
            duration: compare_duration(current.duration, other.duration),

            tests: compare_count(current.tests, other.tests),
            tests_succ: compare_count(current.tests_succ, other.tests_succ),
            tests_skip: compare_count(current.tests_skip, other.tests_skip),
            tests_fail: compare_count(current.tests_fail, other.tests_fail),
            tests_error: compare_count(current.tests_error, other.tests_error),

            runs: compare_count(current.runs, other.runs),
            runs_succ: compare_count(current.runs_succ, other.runs_succ),
            runs_skip: compare_count(current.runs_skip, other.runs_skip),
            runs_fail: compare_count(current.runs_fail, other.runs_fail),
            runs_error: compare_count(current.runs_error, other.runs_error),

            reference_commit: reference.and_then(|r| r.commit.clone()),
            reference_type: Some(reference_type.to_string()),
        };

        log::debug!(
            "Compared statistics against {} reference {:?}",
            reference_type,
            stats.reference_commit
        );
        stats
    }
}

impl From<&Statistics> for StatisticsWithDelta {
    fn from(stats: &Statistics) -> Self {
        StatisticsWithDelta {
            files: stats.files.into(),
            suites: stats.suites.into(),
            duration: stats.duration.into(),

            tests: stats.tests.into(),
            tests_succ: stats.tests_succ.into(),
            tests_skip: stats.tests_skip.into(),
            tests_fail: stats.tests_fail.into(),
            tests_error: stats.tests_error.into(),

            runs: stats.runs.into(),
            runs_succ: stats.runs_succ.into(),
            runs_skip: stats.runs_skip.into(),
            runs_fail: stats.runs_fail.into(),
            runs_error: stats.runs_error.into(),

            reference_commit: None,
            reference_type: None,
        }
    }
}

impl From<Statistics> for StatisticsWithDelta {
    fn from(stats: Statistics) -> Self {
        StatisticsWithDelta::from(&stats)
    }
}
