use crate::domain::range::DateRange;
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn format_bound(bound: Option<DateTime<Utc>>) -> String {
    bound.as_ref().map(format_instant).unwrap_or_else(|| "open".to_string())
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    pub inclusive: bool,
    pub interval: String,
    pub instants: Vec<String>,
}

impl PeriodReport {
    pub fn build(range: &DateRange, inclusive: bool) -> Result<Self> {
        let period = range.period(inclusive)?;
        let interval = period.interval().to_string();
        let instants: Vec<String> = period.map(|instant| format_instant(&instant)).collect();

        tracing::info!("📅 Period has {} instants", instants.len());

        Ok(Self {
            inclusive,
            interval,
            instants,
        })
    }

    pub fn render_text(&self) -> String {
        self.instants.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DateReport {
    pub date: String,
    pub inclusive: bool,
    pub before: bool,
    pub after: bool,
    pub within: bool,
}

impl DateReport {
    pub fn build(range: &DateRange, date: &DateTime<Utc>, inclusive: bool) -> Self {
        Self {
            date: format_instant(date),
            inclusive,
            before: range.is_date_before(date, inclusive),
            after: range.is_date_after(date, inclusive),
            within: range.is_date_within(date, inclusive),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "date: {}\nbefore: {}\nafter: {}\nwithin: {}",
            self.date, self.before, self.after, self.within
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub reference: (String, String),
    pub other: (String, String),
    pub inclusive: bool,
    pub before: bool,
    pub after: bool,
    pub within: bool,
    pub outside: bool,
    pub colliding: bool,
}

impl CompareReport {
    pub fn build(reference: &DateRange, other: &DateRange, inclusive: bool) -> Self {
        Self {
            reference: (format_bound(reference.start()), format_bound(reference.finish())),
            other: (format_bound(other.start()), format_bound(other.finish())),
            inclusive,
            before: reference.is_range_before(other, inclusive),
            after: reference.is_range_after(other, inclusive),
            within: reference.is_range_within(other, inclusive),
            outside: reference.is_range_outside(other, inclusive),
            colliding: reference.is_range_colliding(other, inclusive),
        }
    }

    pub fn render_text(&self) -> String {
        format!(
            "reference: {} .. {}\nother: {} .. {}\nbefore: {}\nafter: {}\nwithin: {}\noutside: {}\ncolliding: {}",
            self.reference.0,
            self.reference.1,
            self.other.0,
            self.other.1,
            self.before,
            self.after,
            self.within,
            self.outside,
            self.colliding
        )
    }
}
