//! Locale-aware number formatting
//!
//! Counts are printed with the thousands grouping of a locale. Instead of
//! consulting the process locale, every width computation and every rendering
//! takes a [`FormattingContext`], so measuring a column and filling it always
//! agree on the grouping.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

pub mod delta;
pub mod digits;

pub use delta::{format_count, format_delta, format_duration, hms};
pub use digits::{widths, Widths};

/// Narrow no-break space, the grouping separator of French, Russian and friends.
const NARROW_NBSP: char = '\u{202f}';

/// Digits per group for all supported locales.
const GROUP_SIZE: usize = 3;

/// `lang[_TERRITORY][.codeset][@modifier]`
fn locale_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<lang>[A-Za-z]{2,3})(?:_(?:[A-Za-z]{2}|\d{3}))?(?:\.[A-Za-z0-9_-]+)?(?:@[A-Za-z0-9_-]+)?$",
        )
        .expect("locale pattern is a valid regex")
    })
}

/// Digit grouping rules used when printing counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingContext {
    separator: Option<char>,
}

impl FormattingContext {
    /// No grouping at all, like the `C` locale.
    pub const fn plain() -> Self {
        FormattingContext { separator: None }
    }

    /// Groups of three digits joined by `separator`.
    pub const fn with_separator(separator: char) -> Self {
        FormattingContext {
            separator: Some(separator),
        }
    }

    /// Derive the grouping from a POSIX locale name.
    ///
    /// Accepts `lang[_TERRITORY][.codeset][@modifier]`, e.g. `en_US.UTF-8` or
    /// `de_DE`. `C`, `POSIX` and the empty string mean no grouping.
    pub fn from_locale(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() || name == "C" || name == "POSIX" || name.starts_with("C.") {
            return Ok(Self::plain());
        }

        let caps = locale_pattern()
            .captures(name)
            .ok_or_else(|| Error::UnsupportedLocale(name.to_string()))?;
        let lang = caps["lang"].to_ascii_lowercase();

        let separator = match lang.as_str() {
            "en" | "ja" | "zh" | "ko" | "he" | "th" | "ms" | "ga" => ',',
            "de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" | "el" | "sl" | "hr"
            | "ro" => '.',
            "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "uk" | "bg"
            | "et" | "lt" | "lv" | "hu" => NARROW_NBSP,
            _ => return Err(Error::UnsupportedLocale(name.to_string())),
        };

        log::debug!("Locale {} groups digits with {:?}", name, separator);
        Ok(Self::with_separator(separator))
    }

    /// Render `value` with digit grouping.
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let Some(separator) = self.separator else {
            return digits;
        };

        let mut grouped = String::with_capacity(digits.len() * 2);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % GROUP_SIZE == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }

    /// Number of characters `group(value)` occupies.
    pub fn width(&self, value: u64) -> usize {
        self.group(value).chars().count()
    }
}
