//! Rendering of counts, durations and their deltas

use super::FormattingContext;
use crate::stats::{StatCount, StatDuration};

const NOT_AVAILABLE: &str = "N/A";

fn sign(delta: i64) -> char {
    match delta {
        0 => '±',
        d if d > 0 => '+',
        _ => '-',
    }
}

/// Render a signed delta, its grouped magnitude right-justified to `width`.
///
/// ```
/// use unit_test_summary::format::{format_delta, FormattingContext};
///
/// let ctx = FormattingContext::plain();
/// assert_eq!(format_delta(0, 1, &ctx), "±0");
/// assert_eq!(format_delta(-2, 2, &ctx), "- 2");
/// ```
pub fn format_delta(delta: i64, width: usize, ctx: &FormattingContext) -> String {
    format!(
        "{}{:>width$}",
        sign(delta),
        ctx.group(delta.unsigned_abs()),
        width = width
    )
}

fn format_number(number: i64, width: usize, ctx: &FormattingContext) -> String {
    let grouped = if number < 0 {
        format!("-{}", ctx.group(number.unsigned_abs()))
    } else {
        ctx.group(number.unsigned_abs())
    };
    format!("{:>width$}", grouped, width = width)
}

/// Render a count cell followed by its `label`.
///
/// Unknown counts print as `N/A`. A delta, and any new or gone test counts,
/// follow in square brackets.
pub fn format_count(
    value: &StatCount,
    number_width: usize,
    delta_width: usize,
    label: &str,
    ctx: &FormattingContext,
) -> String {
    match value {
        StatCount::Plain(None) => format!("{} {}", NOT_AVAILABLE, label),
        StatCount::Plain(Some(number)) => {
            format!("{} {}", format_number(*number, number_width, ctx), label)
        }
        StatCount::Compared(compared) => {
            let number = compared.number.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |number| format_number(number, number_width, ctx),
            );

            let mut details = Vec::new();
            if let Some(delta) = compared.delta {
                details.push(format_delta(delta, delta_width, ctx));
            }
            if let Some(new) = compared.new {
                details.push(format!("{} new", ctx.group(new.unsigned_abs())));
            }
            if let Some(gone) = compared.gone {
                details.push(format!("{} gone", ctx.group(gone.unsigned_abs())));
            }

            if details.is_empty() {
                format!("{} {}", number, label)
            } else {
                format!("{} {} [{}]", number, label, details.join(", "))
            }
        }
    }
}

/// Render seconds as hours, minutes and seconds, dropping leading zero units.
///
/// The sign is dropped: `-72` renders like `72` as `1m 12s`.
pub fn hms(seconds: i64) -> String {
    let seconds = seconds.unsigned_abs();
    let (hours, minutes, seconds) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

fn with_label(text: String, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{} {}", text, label),
        None => text,
    }
}

/// Render a duration cell, with an optional label and bracketed delta.
pub fn format_duration(value: &StatDuration, label: Option<&str>) -> String {
    match value {
        StatDuration::Plain(duration) => with_label(
            duration.map_or_else(|| NOT_AVAILABLE.to_string(), hms),
            label,
        ),
        StatDuration::Compared(compared) => {
            let text = with_label(
                compared
                    .duration
                    .map_or_else(|| NOT_AVAILABLE.to_string(), hms),
                label,
            );
            match compared.delta {
                Some(delta) => format!("{} [{} {}]", text, sign(delta), hms(delta)),
                None => text,
            }
        }
    }
}
