use crate::utils::error::{DateError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const STANDARD_ISO_8601_SIMPLISTIC: &str = "iso-8601-simplistic";
pub const STANDARD_ISO_8601_SIMPLISTIC_TIMEZONE: &str = "iso-8601-simplistic-timezone";

static SIMPLISTIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}( \d{2}:\d{2}:\d{2})?$").expect("simplistic pattern is valid")
});

static SIMPLISTIC_TIMEZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(Z|(\-|\+)\d{2}:\d{2})$")
        .expect("simplistic timezone pattern is valid")
});

/// Named date string formats that text can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStandard {
    /// `YYYY-MM-DD` with an optional ` HH:MM:SS`
    Iso8601Simplistic,
    /// `YYYY-MM-DDTHH:MM:SS` followed by `Z` or `±HH:MM`
    Iso8601SimplisticTimezone,
}

impl DateStandard {
    pub const ALL: [DateStandard; 2] = [
        DateStandard::Iso8601Simplistic,
        DateStandard::Iso8601SimplisticTimezone,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DateStandard::Iso8601Simplistic => STANDARD_ISO_8601_SIMPLISTIC,
            DateStandard::Iso8601SimplisticTimezone => STANDARD_ISO_8601_SIMPLISTIC_TIMEZONE,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            DateStandard::Iso8601Simplistic => &*SIMPLISTIC,
            DateStandard::Iso8601SimplisticTimezone => &*SIMPLISTIC_TIMEZONE,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

impl FromStr for DateStandard {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        DateStandard::ALL
            .into_iter()
            .find(|standard| standard.id() == s)
            .ok_or_else(|| DateError::UnknownStandard {
                standard: s.to_string(),
            })
    }
}

impl fmt::Display for DateStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Check `text` against the standard registered under `standard`.
pub fn check_standard(standard: &str, text: &str) -> Result<bool> {
    let standard: DateStandard = standard.parse()?;
    Ok(standard.matches(text))
}

/// Parse text in one of the registered standards into a UTC instant.
///
/// Simplistic dates carry no offset and are read as UTC; a missing time is
/// midnight.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    let invalid = |reason: String| DateError::InvalidDate {
        value: text.to_string(),
        reason,
    };

    if DateStandard::Iso8601SimplisticTimezone.matches(text) {
        return DateTime::parse_from_rfc3339(text)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|e| invalid(e.to_string()));
    }

    if DateStandard::Iso8601Simplistic.matches(text) {
        let parsed = match text.len() {
            10 => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN)),
            _ => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"),
        };
        let naive = parsed.map_err(|e| invalid(e.to_string()))?;

        return Ok(naive.and_utc());
    }

    Err(invalid(format!(
        "expected {} or {}",
        STANDARD_ISO_8601_SIMPLISTIC, STANDARD_ISO_8601_SIMPLISTIC_TIMEZONE
    )))
}
