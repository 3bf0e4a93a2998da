use crate::domain::interval::Interval;
use chrono::{DateTime, Utc};
use std::iter::FusedIterator;

/// Lazily stepped instants from `start` up to, but excluding, `end`.
///
/// Stops as soon as a step fails to move forward, so the sequence is always
/// finite.
#[derive(Debug, Clone)]
pub struct Period {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    interval: Interval,
    next: Option<DateTime<Utc>>,
}

impl Period {
    pub(crate) fn new(start: DateTime<Utc>, end: DateTime<Utc>, interval: Interval) -> Self {
        Self {
            start,
            end,
            interval,
            next: Some(start),
        }
    }

    /// First candidate instant.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive terminal bound.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }
}

impl Iterator for Period {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|current| *current < self.end)?;
        // 月份與負的固定部分混用時，某些步可能倒退
        self.next = self
            .interval
            .add_to(&current)
            .filter(|next| *next > current);
        Some(current)
    }
}

impl FusedIterator for Period {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn test_backward_step_ends_the_sequence() {
        let start = Utc.with_ymd_and_hms(2018, 1, 10, 0, 0, 0).unwrap();
        let end = start + TimeDelta::days(5);
        let mut period = Period::new(start, end, Interval::new(0, -TimeDelta::days(1)));

        assert_eq!(period.next(), Some(start));
        assert_eq!(period.next(), None);
        assert_eq!(period.next(), None);
    }
}
