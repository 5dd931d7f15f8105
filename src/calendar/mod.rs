//! Calendar days, and the month grids they are displayed in

pub mod grid;
pub use grid::build_grid;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use bitflags::bitflags;

bitflags! {
    #[derive(Serialize, Deserialize)]
    pub struct DayFlags: u8 {
        /// The day belongs to the month being displayed (rather than being a padding day)
        const CURRENT_MONTH = 1;
        /// The day is today
        const TODAY = 2;
        /// The day is strictly before today
        const PAST = 4;
    }
}

/// A day in a [`MonthGrid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    date: NaiveDate,
    flags: DayFlags,
}

impl CalendarDay {
    /// Describe `date` as seen from the displayed month `month_ref`, at the real-world date `today`
    pub fn new(date: NaiveDate, month_ref: NaiveDate, today: NaiveDate) -> Self {
        let mut flags = DayFlags::empty();
        flags.set(DayFlags::CURRENT_MONTH, is_same_month(date, month_ref));
        flags.set(DayFlags::TODAY, date == today);
        flags.set(DayFlags::PAST, date < today);
        Self { date, flags }
    }

    pub fn date(&self) -> NaiveDate         { self.date }
    pub fn flags(&self) -> DayFlags         { self.flags }
    pub fn is_current_month(&self) -> bool  { self.flags.contains(DayFlags::CURRENT_MONTH) }
    pub fn is_today(&self) -> bool          { self.flags.contains(DayFlags::TODAY) }
    pub fn is_past(&self) -> bool           { self.flags.contains(DayFlags::PAST) }
}


/// The days displayed for a month, in whole Monday-to-Sunday weeks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    /// The first day of the displayed month
    month: NaiveDate,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    pub(crate) fn new(month: NaiveDate, days: Vec<CalendarDay>) -> Self {
        Self { month, days }
    }

    /// The first day of the displayed month
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate over the rows of this grid, each one being a Monday-to-Sunday week
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarDay> {
        self.days.chunks(7)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDay> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}


/// Whether two dates share the same year and month
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// The first day of the month `date` is in
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The last day of the month `date` is in
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    match next_month(date).pred_opt() {
        Some(last) => last,
        // Only happens at the very end of chrono's supported range
        None => NaiveDate::MAX,
    }
}

/// The first day of the month after the one `date` is in
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
}

/// The first day of the month before the one `date` is in
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds() {
        assert_eq!(first_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 1));
        assert_eq!(last_of_month(ymd(2024, 2, 17)), ymd(2024, 2, 29));
        assert_eq!(last_of_month(ymd(2023, 2, 1)), ymd(2023, 2, 28));
        assert_eq!(last_of_month(ymd(2023, 12, 31)), ymd(2023, 12, 31));
        assert_eq!(last_of_month(ymd(2023, 4, 2)), ymd(2023, 4, 30));
    }

    #[test]
    fn navigation_wraps_years() {
        assert_eq!(next_month(ymd(2023, 12, 25)), ymd(2024, 1, 1));
        assert_eq!(previous_month(ymd(2024, 1, 31)), ymd(2023, 12, 1));
        assert_eq!(next_month(ymd(2024, 1, 31)), ymd(2024, 2, 1));
    }

    #[test]
    fn day_flags() {
        let today = ymd(2024, 3, 5);
        let month = ymd(2024, 3, 1);

        let d = CalendarDay::new(today, month, today);
        assert!(d.is_today() && d.is_current_month() && !d.is_past());

        let d = CalendarDay::new(ymd(2024, 2, 29), month, today);
        assert!(!d.is_today() && !d.is_current_month() && d.is_past());

        let d = CalendarDay::new(ymd(2024, 3, 6), month, today);
        assert!(!d.is_today() && d.is_current_month() && !d.is_past());
    }
}
