//! Column widths of counts and deltas

use super::FormattingContext;
use crate::stats::StatCount;

/// Width of `N/A`, the smallest column a count can get.
pub const NA_WIDTH: usize = 3;

/// Printed widths of a count and of its delta magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widths {
    pub number: usize,
    pub delta: usize,
}

impl Widths {
    pub fn new(number: usize, delta: usize) -> Self {
        Widths { number, delta }
    }

    /// Column-wise maximum of two widths.
    pub fn max(self, other: Widths) -> Widths {
        Widths {
            number: self.number.max(other.number),
            delta: self.delta.max(other.delta),
        }
    }
}

fn magnitude_width(value: i64, ctx: &FormattingContext) -> usize {
    ctx.width(value.unsigned_abs())
}

/// Compute the widths `value` needs when printed under `ctx`.
///
/// A known plain count takes exactly its grouped width and reserves no delta
/// column. An unknown plain count reserves room for `N/A`, or for `sample`
/// if that prints wider. A compared count falls back to the `N/A` width for
/// whichever of number and delta it lacks, so it always reserves a delta
/// column that sibling cells may fill.
pub fn widths(value: &StatCount, sample: Option<i64>, ctx: &FormattingContext) -> Widths {
    match value {
        StatCount::Plain(Some(number)) => Widths::new(magnitude_width(*number, ctx), 0),
        StatCount::Plain(None) => {
            let sample = sample.map_or(0, |sample| magnitude_width(sample, ctx));
            Widths::new(NA_WIDTH.max(sample), 0)
        }
        StatCount::Compared(compared) => Widths::new(
            compared
                .number
                .map_or(NA_WIDTH, |number| magnitude_width(number, ctx)),
            compared
                .delta
                .map_or(NA_WIDTH, |delta| magnitude_width(delta, ctx)),
        ),
    }
}

/// Shared widths of an alignment group, the maximum over all its cells.
pub fn group_widths<'a>(
    values: impl IntoIterator<Item = &'a StatCount>,
    ctx: &FormattingContext,
) -> Widths {
    values
        .into_iter()
        .map(|value| widths(value, None, ctx))
        .fold(Widths::default(), Widths::max)
}
