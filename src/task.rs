//! To-do tasks, bound to a calendar day and an hour slot

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, Utc};

use crate::error::Error;

/// Identifier of a task.
///
/// It is derived from the creation time (milliseconds since the Unix epoch), and never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Pick a fresh ID from the current time, that is strictly greater than `last_issued`
    pub fn generate(last_issued: Option<TaskId>) -> Result<Self, Error> {
        Self::generate_at(Utc::now().timestamp_millis(), last_issued)
    }

    /// Same as [`Self::generate`], with an explicit clock reading.
    /// Two tasks created within the same millisecond still get different IDs.
    ///
    /// Fails with [`Error::IdsExhausted`] when `last_issued` is already the greatest possible ID.
    pub fn generate_at(now_millis: i64, last_issued: Option<TaskId>) -> Result<Self, Error> {
        match last_issued {
            Some(TaskId(last)) if last >= now_millis => {
                last.checked_add(1)
                    .map(TaskId)
                    .ok_or(Error::IdsExhausted(TaskId(last)))
            },
            _ => Ok(TaskId(now_millis)),
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// An hour slot in a day, within `0..=23`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub const MIDNIGHT: Hour = Hour(0);

    pub fn new(hour: u8) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::Validation(format!("Hour {} is not within 0..=23", hour)));
        }
        Ok(Self(hour))
    }

    /// The hour configured in [`crate::config::DEFAULT_HOUR`], or midnight if that value is out of range
    pub fn configured_default() -> Self {
        Self::new(crate::config::default_hour()).unwrap_or(Self::MIDNIGHT)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Hour {
    type Error = Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Hour::new(value)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> u8 {
        hour.0
    }
}

impl Display for Hour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:00", self.0)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    /// The display name of the task. Never blank.
    text: String,
    hour: Hour,
    completed: bool,
    /// The day this task is scheduled on
    date: NaiveDate,
}

impl Task {
    /// Create a brand new, uncompleted task.
    ///
    /// Fails in case `text` is empty or only made of whitespace.
    pub fn new(id: TaskId, text: String, hour: Hour, date: NaiveDate) -> Result<Self, Error> {
        Self::new_with_parameters(id, text, hour, false, date)
    }

    /// Create a task instance, that may be completed already (e.g. a task that comes from a server)
    pub fn new_with_parameters(id: TaskId, text: String, hour: Hour, completed: bool, date: NaiveDate) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Err(Error::Validation("Please enter a name for the task".to_string()));
        }
        Ok(Self { id, text, hour, completed, date })
    }

    pub fn id(&self) -> TaskId      { self.id        }
    pub fn text(&self) -> &str      { &self.text     }
    pub fn hour(&self) -> Hour      { self.hour      }
    pub fn completed(&self) -> bool { self.completed }
    pub fn date(&self) -> NaiveDate { self.date      }

    /// Flip the completion status. Nothing else about the task ever changes.
    pub(crate) fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}

/// The label shown in a day cell, e.g. `9:00 - Buy milk`
impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.hour, self.text)
    }
}
