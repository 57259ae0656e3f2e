//! Reporting window for a digest

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("period start {start} is after end {end}")]
pub struct InvalidPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Inclusive date range a digest covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidPeriod> {
        if start > end {
            return Err(InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending on (and including) `end`
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end - Duration::days(span),
            end,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Human label used in prompts, e.g. "2026-10-01 to 2026-10-07 (7 days)"
    pub fn label(&self) -> String {
        format!("{} to {} ({} days)", self.start, self.end, self.days())
    }
}
