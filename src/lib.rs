//! This crate provides the core of a personal task calendar.
//!
//! Tasks are scheduled on a calendar day, at a given hour, and can be marked as completed.
//!
//! * the [`calendar`] module builds the grid of days displayed for a month (whole weeks, Monday first)
//! * a [`TaskStore`](store::TaskStore) holds the tasks, and keeps [completion counters](completion::CompletionCounters) up to date
//! * a [`SyncGateway`](traits::SyncGateway) is where tasks are fetched from and sent to. The [`client`] module provides one that talks to an HTTP backend.
//!
//! These are tied together in a [`Session`](session::Session), that applies user actions locally at once, and forwards them to the gateway in the background.

pub mod traits;
pub mod error;
pub use error::{Error, SyncError};

pub mod calendar;
pub use calendar::{CalendarDay, MonthGrid};
mod task;
pub use task::{Hour, Task, TaskId};
pub mod completion;
pub use completion::CompletionCounters;
pub mod store;
pub use store::TaskStore;
pub mod session;
pub use session::Session;

pub mod wire;
pub mod client;
pub mod memory;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
