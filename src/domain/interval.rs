use crate::utils::error::{DateError, Result};
use chrono::{DateTime, Months, TimeDelta, TimeZone};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$",
    )
    .expect("duration pattern is valid")
});

/// A fixed step between instants.
///
/// The calendar part (`months`) is applied with month arithmetic so that
/// `P1M` from the 31st clamps to the end of the next month; the fixed part
/// (`delta`) is an exact duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    months: u32,
    delta: TimeDelta,
}

impl Interval {
    pub fn new(months: u32, delta: TimeDelta) -> Self {
        Self { months, delta }
    }

    /// `None` when the year count does not fit in months.
    pub fn years(years: u32) -> Option<Self> {
        years
            .checked_mul(12)
            .map(|months| Self::new(months, TimeDelta::zero()))
    }

    pub fn months(months: u32) -> Self {
        Self::new(months, TimeDelta::zero())
    }

    // u32 的上限乘上一週的秒數仍在 TimeDelta 範圍內
    pub fn weeks(weeks: u32) -> Self {
        Self::new(0, TimeDelta::weeks(i64::from(weeks)))
    }

    pub fn days(days: u32) -> Self {
        Self::new(0, TimeDelta::days(i64::from(days)))
    }

    pub fn hours(hours: u32) -> Self {
        Self::new(0, TimeDelta::hours(i64::from(hours)))
    }

    pub fn minutes(minutes: u32) -> Self {
        Self::new(0, TimeDelta::minutes(i64::from(minutes)))
    }

    pub fn seconds(seconds: u32) -> Self {
        Self::new(0, TimeDelta::seconds(i64::from(seconds)))
    }

    pub fn calendar_months(&self) -> u32 {
        self.months
    }

    pub fn fixed(&self) -> TimeDelta {
        self.delta
    }

    pub fn is_zero(&self) -> bool {
        self.months == 0 && self.delta.is_zero()
    }

    /// `instant + self`, or `None` when the result leaves chrono's range.
    pub fn add_to<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        instant
            .clone()
            .checked_add_months(Months::new(self.months))?
            .checked_add_signed(self.delta)
    }

    /// `instant - self`, or `None` when the result leaves chrono's range.
    pub fn sub_from<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        instant
            .clone()
            .checked_sub_months(Months::new(self.months))?
            .checked_sub_signed(self.delta)
    }
}

fn invalid(value: &str, reason: impl Into<String>) -> DateError {
    DateError::InvalidInterval {
        value: value.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for Interval {
    type Err = DateError;

    /// Parses ISO-8601 durations such as `P1D`, `PT12H` or `P1Y2M3DT4H5M6S`.
    fn from_str(s: &str) -> Result<Self> {
        let caps = DURATION_PATTERN
            .captures(s)
            .ok_or_else(|| invalid(s, "expected an ISO-8601 duration like P1D"))?;

        // "P" 或 "PT" 沒有任何單位
        if caps.iter().skip(1).all(|group| group.is_none()) || s.ends_with('T') {
            return Err(invalid(s, "duration has no components"));
        }

        let field = |index: usize| -> Result<i64> {
            match caps.get(index) {
                Some(m) => m
                    .as_str()
                    .parse::<i64>()
                    .map_err(|e| invalid(s, format!("component '{}': {}", m.as_str(), e))),
                None => Ok(0),
            }
        };

        let (years, months) = (field(1)?, field(2)?);
        let months = years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .and_then(|m| u32::try_from(m).ok())
            .ok_or_else(|| invalid(s, "too many months"))?;

        let seconds = [(3, 604_800), (4, 86_400), (5, 3_600), (6, 60), (7, 1)]
            .into_iter()
            .try_fold(0i64, |total, (index, unit)| {
                let value = field(index)?;
                value
                    .checked_mul(unit)
                    .and_then(|v| total.checked_add(v))
                    .ok_or_else(|| invalid(s, "duration too large"))
            })?;

        let delta = TimeDelta::try_seconds(seconds).ok_or_else(|| invalid(s, "duration too large"))?;

        Ok(Self::new(months, delta))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }

        write!(f, "P")?;
        let (years, months) = (self.months / 12, self.months % 12);
        if years > 0 {
            write!(f, "{}Y", years)?;
        }
        if months > 0 {
            write!(f, "{}M", months)?;
        }

        let sign = if self.delta < TimeDelta::zero() { "-" } else { "" };
        let total = self.delta.num_seconds().unsigned_abs();
        let nanos = self.delta.subsec_nanos().unsigned_abs();
        let (days, rest) = (total / 86_400, total % 86_400);
        let (hours, minutes, seconds) = (rest / 3_600, rest % 3_600 / 60, rest % 60);

        if days > 0 {
            write!(f, "{}{}D", sign, days)?;
        }
        if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 {
            write!(f, "T")?;
            if hours > 0 {
                write!(f, "{}{}H", sign, hours)?;
            }
            if minutes > 0 {
                write!(f, "{}{}M", sign, minutes)?;
            }
            if nanos > 0 {
                write!(f, "{}{}.{:09}S", sign, seconds, nanos)?;
            } else if seconds > 0 {
                write!(f, "{}{}S", sign, seconds)?;
            }
        }
        Ok(())
    }
}
