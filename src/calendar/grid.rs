//! Builds the grid of days displayed for a month

use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::{CalendarDay, MonthGrid};
use crate::calendar::{first_of_month, last_of_month};

/// Index of a day in a Monday-first week (Monday is 0, Sunday is 6)
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// How many days of the previous month are displayed before the 1st
pub fn leading_padding(month_ref: NaiveDate) -> u32 {
    weekday_index(first_of_month(month_ref))
}

/// How many days of the next month are displayed after the last day
pub fn trailing_padding(month_ref: NaiveDate) -> u32 {
    6 - weekday_index(last_of_month(month_ref))
}

/// Build the grid for the month `reference` is in.
///
/// Only the year and month of `reference` matter. The grid starts on the Monday on or before the 1st,
/// and ends on the Sunday on or after the last day of the month, so its length is always a multiple of 7.
/// `today` is only used to flag today's and past days.
pub fn build_grid(reference: NaiveDate, today: NaiveDate) -> MonthGrid {
    let first = first_of_month(reference);
    let last = last_of_month(reference);

    let start = first - Duration::days(leading_padding(reference) as i64);
    let end = last + Duration::days(trailing_padding(reference) as i64);
    log::trace!("Grid for {}: {} to {}", first.format("%Y-%m"), start, end);

    let days = start.iter_days()
        .take_while(|day| *day <= end)
        .map(|day| CalendarDay::new(day, first, today))
        .collect();

    MonthGrid::new(first, days)
}
