//! A module to parse backend records

use std::convert::TryFrom;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::SyncError;
use crate::task::{Hour, Task, TaskId};
use crate::wire::{RawHour, RawTask};

/// Parse a backend record into the internal representation [`crate::task::Task`].
///
/// The date is normalized to the calendar day it falls on in `tz` (the local time zone, for real sessions).
pub fn parse<Tz: TimeZone>(raw: &RawTask, tz: &Tz) -> Result<Task, SyncError> {
    let id = TaskId::from(raw.id);
    let hour = parse_hour(raw.hour.as_ref())
        .map_err(|err| SyncError::InvalidRecord(format!("task {}: {}", id, err)))?;
    let date = parse_date(&raw.date, tz)
        .ok_or_else(|| SyncError::InvalidRecord(format!("task {}: invalid date {:?}", id, raw.date)))?;

    Task::new_with_parameters(id, raw.text.clone(), hour, raw.completed, date)
        .map_err(|err| SyncError::InvalidRecord(format!("task {}: {}", id, err)))
}

fn parse_hour(raw: Option<&RawHour>) -> Result<Hour, String> {
    let value = match raw {
        None => return Ok(Hour::configured_default()),
        Some(RawHour::Number(n)) => *n,
        Some(RawHour::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(Hour::configured_default());
            }
            s.parse::<i64>().map_err(|_| format!("invalid hour {:?}", s))?
        },
    };

    u8::try_from(value).ok()
        .and_then(|h| Hour::new(h).ok())
        .ok_or_else(|| format!("hour {} is not within 0..=23", value))
}

/// Parse an ISO-8601 date (`2024-03-05`) or date-time (`2024-03-04T22:00:00.000Z`).
///
/// A date-time is converted to `tz` before its time part is dropped.
pub fn parse_date<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::{FixedOffset, Utc};

    const EXAMPLE_RECORDS: &str = r#"[
        {"id": 1709596800000, "text": "Buy milk", "hour": "9", "completed": false, "date": "2024-03-05T00:00:00.000Z"},
        {"id": 1709596800001, "text": "Call Mom", "hour": 18, "completed": true, "date": "2024-03-04T22:00:00.000Z"},
        {"id": 1709596800002, "text": "No hour", "completed": false, "date": "2024-03-07"}
    ]"#;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parsing() {
        let records: Vec<RawTask> = serde_json::from_str(EXAMPLE_RECORDS).unwrap();
        let tasks: Vec<Task> = records.iter().map(|r| parse(r, &Utc).unwrap()).collect();

        assert_eq!(tasks[0].id(), TaskId::from(1709596800000));
        assert_eq!(tasks[0].text(), "Buy milk");
        assert_eq!(tasks[0].hour(), Hour::new(9).unwrap());
        assert_eq!(tasks[0].completed(), false);
        assert_eq!(tasks[0].date(), ymd(2024, 3, 5));

        assert_eq!(tasks[1].hour(), Hour::new(18).unwrap());
        assert_eq!(tasks[1].completed(), true);
        assert_eq!(tasks[1].date(), ymd(2024, 3, 4));

        assert_eq!(tasks[2].hour(), Hour::MIDNIGHT);
        assert_eq!(tasks[2].date(), ymd(2024, 3, 7));
    }

    #[test]
    fn test_dates_are_normalized_to_the_time_zone() {
        // Local midnight in a UTC+2 browser, as sent by web front-ends
        let s = "2024-03-04T22:00:00.000Z";
        let bucharest = FixedOffset::east_opt(2 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();

        assert_eq!(parse_date(s, &bucharest), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date(s, &Utc), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_date(s, &new_york), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_date("2024-03-05T00:00:00+02:00", &bucharest), Some(ymd(2024, 3, 5)));

        // Plain dates have no time zone to convert from
        assert_eq!(parse_date("2024-03-05", &new_york), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn test_invalid_records() {
        let base = RawTask {
            id: 1,
            text: "Something".to_string(),
            hour: Some(RawHour::Number(3)),
            completed: false,
            date: "2024-03-05".to_string(),
        };
        assert!(parse(&base, &Utc).is_ok());

        let blank = RawTask { text: "  ".to_string(), ..base.clone() };
        assert!(matches!(parse(&blank, &Utc), Err(SyncError::InvalidRecord(_))));

        let late = RawTask { hour: Some(RawHour::Number(24)), ..base.clone() };
        assert!(matches!(parse(&late, &Utc), Err(SyncError::InvalidRecord(_))));

        let negative = RawTask { hour: Some(RawHour::Text("-1".to_string())), ..base.clone() };
        assert!(matches!(parse(&negative, &Utc), Err(SyncError::InvalidRecord(_))));

        let garbage = RawTask { hour: Some(RawHour::Text("noon".to_string())), ..base.clone() };
        assert!(matches!(parse(&garbage, &Utc), Err(SyncError::InvalidRecord(_))));

        let no_date = RawTask { date: "tomorrow".to_string(), ..base };
        assert!(matches!(parse(&no_date, &Utc), Err(SyncError::InvalidRecord(_))));
    }
}
