//! Errors returned by this crate

use thiserror::Error;

use crate::task::TaskId;

/// An error that can happen while manipulating tasks
#[derive(Debug, Error)]
pub enum Error {
    /// The user input is not acceptable (e.g. a blank task name). Nothing has been created.
    #[error("{0}")]
    Validation(String),

    /// No task has this ID
    #[error("no task with id {0}")]
    NotFound(TaskId),

    /// No task ID is left after this one, no new task can be created
    #[error("no task id is available after {0}")]
    IdsExhausted(TaskId),
}

/// An error that happened while talking to a [`SyncGateway`](crate::traits::SyncGateway)
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server replied with a non-success status code
    #[error("unexpected HTTP status code {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A record from the server could not be turned into a task
    #[error("invalid task record: {0}")]
    InvalidRecord(String),

    /// The background task that was persisting an item went away before reporting its outcome
    #[error("persistence was aborted")]
    Aborted,

    /// Failure injected by a [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)
    #[error("{0}")]
    Mocked(String),
}
