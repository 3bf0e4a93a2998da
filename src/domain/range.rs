use crate::domain::interval::Interval;
use crate::domain::period::Period;
use crate::utils::error::{DateError, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// An immutable span of time with an optional step.
///
/// Either bound may be missing, but never both. A missing bound is treated
/// as unbounded: nothing is before an open start and nothing is after an
/// open finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: Option<DateTime<Utc>>,
    finish: Option<DateTime<Utc>>,
    interval: Option<Interval>,
}

impl DateRange {
    pub fn new(
        start: Option<DateTime<Utc>>,
        finish: Option<DateTime<Utc>>,
        interval: Option<Interval>,
    ) -> Result<Self> {
        if start.is_none() && finish.is_none() {
            return Err(DateError::InvalidRange);
        }

        Ok(Self {
            start,
            finish,
            interval,
        })
    }

    pub fn between(start: DateTime<Utc>, finish: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            finish: Some(finish),
            interval: None,
        }
    }

    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            finish: None,
            interval: None,
        }
    }

    pub fn until(finish: DateTime<Utc>) -> Self {
        Self {
            start: None,
            finish: Some(finish),
            interval: None,
        }
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn finish(&self) -> Option<DateTime<Utc>> {
        self.finish
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Steps through the range by its interval.
    ///
    /// With `inclusive` the original bounds are part of the sequence; without
    /// it the sequence is shrunk by one interval at each end. The terminal
    /// bound is pushed out by one second before stepping, so an instant up to
    /// a second past the (adjusted) finish can still be produced when the
    /// range carries sub-second components.
    pub fn period(&self, inclusive: bool) -> Result<Period> {
        let (Some(mut start), Some(mut finish)) = (self.start, self.finish) else {
            return Err(DateError::CannotCreatePeriod);
        };

        let interval = self.interval.ok_or(DateError::MissingInterval)?;
        // 溢位交給下面的 OutOfRange 處理
        if interval.add_to(&start).is_some_and(|next| next <= start) {
            return Err(DateError::InvalidInterval {
                value: interval.to_string(),
                reason: "interval must move forward in time".to_string(),
            });
        }

        if !inclusive {
            start = interval.add_to(&start).ok_or(DateError::OutOfRange)?;
            finish = interval.sub_from(&finish).ok_or(DateError::OutOfRange)?;
        }

        let end = finish
            .checked_add_signed(TimeDelta::seconds(1))
            .ok_or(DateError::OutOfRange)?;

        tracing::debug!(%start, %end, %interval, inclusive, "creating period");

        Ok(Period::new(start, end, interval))
    }

    /// Shorthand for `period(true)`.
    pub fn iter(&self) -> Result<Period> {
        self.period(true)
    }

    pub fn is_open_ended(&self) -> bool {
        self.start.is_none() || self.finish.is_none()
    }

    pub fn has_open_start(&self) -> bool {
        self.start.is_none()
    }

    pub fn has_open_finish(&self) -> bool {
        self.finish.is_none()
    }

    /// Is `date` inside the range?
    ///
    /// The flag is inverted before asking [`DateRange::is_date_before`] and
    /// [`DateRange::is_date_after`], so with `inclusive` both endpoints are
    /// inside and without it both are outside.
    pub fn is_date_within(&self, date: &DateTime<Utc>, inclusive: bool) -> bool {
        if self.is_date_before(date, !inclusive) {
            return false;
        }

        if self.is_date_after(date, !inclusive) {
            return false;
        }

        true
    }

    pub fn is_date_before(&self, date: &DateTime<Utc>, inclusive: bool) -> bool {
        match self.start {
            None => false,
            Some(start) if inclusive => *date <= start,
            Some(start) => *date < start,
        }
    }

    pub fn is_date_after(&self, date: &DateTime<Utc>, inclusive: bool) -> bool {
        match self.finish {
            None => false,
            Some(finish) if inclusive => *date >= finish,
            Some(finish) => *date > finish,
        }
    }

    /// Is `other` enclosed by this range?
    ///
    /// Unlike [`DateRange::is_date_within`] the flag is passed through as is.
    pub fn is_range_within(&self, other: &DateRange, inclusive: bool) -> bool {
        if self.is_range_before(other, inclusive) {
            return false;
        }

        if self.is_range_after(other, inclusive) {
            return false;
        }

        true
    }

    /// Does `other` reach outside this range?
    pub fn is_range_outside(&self, other: &DateRange, inclusive: bool) -> bool {
        !self.is_range_within(other, inclusive)
    }

    /// Do the two ranges share any instant?
    ///
    /// With `inclusive` a shared endpoint counts as a collision, without it
    /// the ranges have to overlap past their endpoints.
    pub fn is_range_colliding(&self, other: &DateRange, inclusive: bool) -> bool {
        let finishes_before = other
            .finish
            .is_some_and(|finish| self.is_date_before(&finish, !inclusive));

        let starts_after = other
            .start
            .is_some_and(|start| self.is_date_after(&start, !inclusive));

        !finishes_before && !starts_after
    }

    /// Does `other` start before this range?
    pub fn is_range_before(&self, other: &DateRange, inclusive: bool) -> bool {
        match (other.start, self.start) {
            (Some(date), _) => self.is_date_before(&date, inclusive),
            // 兩邊都沒有起點時視為相等
            (None, None) => inclusive,
            (None, Some(_)) => true,
        }
    }

    /// Does `other` finish after this range?
    pub fn is_range_after(&self, other: &DateRange, inclusive: bool) -> bool {
        match (other.finish, self.finish) {
            (Some(date), _) => self.is_date_after(&date, inclusive),
            (None, None) => inclusive,
            (None, Some(_)) => true,
        }
    }
}
