use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::JournalError;

/// A displayed calendar month.
///
/// Holds the first day of the month. Construction checks that the whole
/// padded grid window around the month is representable, so the grid and
/// navigation helpers never have to fail on in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Build from a year and a zero-based month index. Indices outside 0..=11
    /// carry into the neighbouring years (-1 is December of the previous year).
    pub fn new(year: i32, month0: i32) -> Result<Self, JournalError> {
        let total = year as i64 * 12 + month0 as i64;
        let y = total.div_euclid(12);
        let m = total.rem_euclid(12) as u32;

        let year = i32::try_from(y).map_err(|_| JournalError::YearOutOfRange(y))?;
        let first =
            NaiveDate::from_ymd_opt(year, m + 1, 1).ok_or(JournalError::YearOutOfRange(y))?;

        // Leading padding is at most 6 days; the window after the first spans
        // the month plus the following one.
        first
            .checked_sub_days(Days::new(6))
            .and_then(|_| first.checked_add_days(Days::new(62)))
            .ok_or(JournalError::YearOutOfRange(y))?;

        Ok(Self { first })
    }

    /// Build from a year and a one-based month number, without carry.
    pub fn from_calendar(year: i32, month: i64) -> Result<Self, JournalError> {
        if !(1..=12).contains(&month) {
            return Err(JournalError::MonthOutOfRange(month));
        }
        Self::new(year, month as i32 - 1)
    }

    pub fn from_date(date: NaiveDate) -> Result<Self, JournalError> {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// One-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Days::new(self.days_in_month() as u64 - 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let (y, m) = if self.first.month() == 12 {
            (self.first.year() + 1, 1)
        } else {
            (self.first.year(), self.first.month() + 1)
        };
        // `new` guarantees the following month is representable.
        NaiveDate::from_ymd_opt(y, m, 1)
            .map(|next| next.signed_duration_since(self.first).num_days() as u32)
            .unwrap_or(31)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn prev(&self) -> Result<Self, JournalError> {
        Self::new(self.year(), self.month0() as i32 - 1)
    }

    pub fn next(&self) -> Result<Self, JournalError> {
        Self::new(self.year(), self.month0() as i32 + 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}
