//! This module handles conversion between the JSON records exchanged with the task backend and internal representations
//!
//! A record looks like `{"id": 1709596800000, "text": "Buy milk", "hour": "9", "completed": false, "date": "2024-03-05T00:00:00.000Z"}`.
//! The backend has been fed by several front-ends over time, so `hour` can either be a number or a numeric string.

use serde::{Deserialize, Serialize};

mod parser;
pub use parser::{parse, parse_date};
mod builder;
pub use builder::{build, format_date};

/// A task, as stored by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub hour: Option<RawHour>,
    #[serde(default)]
    pub completed: bool,
    pub date: String,
}

/// The `hour` field of a [`RawTask`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawHour {
    Number(i64),
    Text(String),
}
