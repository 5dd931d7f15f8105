//! A module to build backend records

use chrono::{NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::task::Task;
use crate::wire::{RawHour, RawTask};

/// Create a backend record from a [`crate::task::Task`]
pub fn build<Tz: TimeZone>(task: &Task, tz: &Tz) -> RawTask {
    RawTask {
        id: task.id().as_i64(),
        text: task.text().to_string(),
        hour: Some(RawHour::Text(task.hour().value().to_string())),
        completed: task.completed(),
        date: format_date(task.date(), tz),
    }
}

/// Format a day as the UTC instant of its midnight in `tz`, e.g. `2024-03-04T22:00:00.000Z` for March 5th in UTC+2
pub fn format_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> String {
    let midnight = match date.and_hms_opt(0, 0, 0) {
        Some(m) => m,
        None => return date.format("%Y-%m-%d").to_string(),
    };
    let instant = match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        // Midnight was skipped by a DST change in this time zone
        None => Utc.from_utc_datetime(&midnight),
    };
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
