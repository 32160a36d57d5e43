use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::month::YearMonth;

/// Minimum cells in the month grid: five Sunday-first weeks. Months that need
/// a sixth row keep all of their own days but get no trailing padding.
pub const GRID_CELLS: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub belongs_to_displayed_month: bool,
}

/// Number of previous-month cells before the first of the month (Sunday = 0).
pub fn leading_days(month: YearMonth) -> u32 {
    month.first_day().weekday().num_days_from_sunday()
}

/// Cells the grid for `month` occupies: 35, or more when the month itself
/// runs past the fifth week.
pub fn grid_len(month: YearMonth) -> usize {
    GRID_CELLS.max(leading_days(month) as usize + month.days_in_month() as usize)
}

/// Lay `month` out Sunday-first, padding with adjacent-month days up to 35 cells.
pub fn build_month_grid(month: YearMonth) -> Vec<CalendarCell> {
    let start = month.first_day() - Days::new(leading_days(month) as u64);

    start
        .iter_days()
        .take(grid_len(month))
        .map(|date| CalendarCell {
            date,
            belongs_to_displayed_month: month.contains(date),
        })
        .collect()
}
