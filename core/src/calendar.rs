//! Calendar arithmetic over the generation horizon.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The closed calendar interval every generated date is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of whole days from start to end.
    pub fn day_span(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// All first-of-month dates within the horizon, ascending.
    pub fn month_starts(&self) -> Vec<NaiveDate> {
        month_starts(self.start, self.end)
    }
}

/// First-of-month dates d with `from <= d <= to`, ascending.
/// A mid-month `from` contributes its *next* month start: a subscription
/// opened mid-month is first invoiced on the following month boundary.
pub fn month_starts(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = if from.day() == 1 {
        from
    } else {
        next_month_start(from)
    };
    while cursor <= to {
        out.push(cursor);
        cursor = next_month_start(cursor);
    }
    out
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid")
}

/// Fiscal Q4: October through December.
pub fn is_q4(date: NaiveDate) -> bool {
    date.month() >= 10
}
