//! Utilities to notify listeners (usually a UI) about what happens in a session

use std::fmt::{Display, Error, Formatter};

use crate::completion::CompletionCounters;

/// An event that happens during a session
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The initial load has not started
    NotStarted,
    /// Tasks are being fetched from the gateway
    Loading,
    /// The initial load is finished
    Loaded{ success: bool, counters: CompletionCounters },
    /// The tasks have changed (a task has been added or toggled)
    Changed{ counters: CompletionCounters },
}

impl Display for SessionEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            SessionEvent::NotStarted => write!(f, "Not started"),
            SessionEvent::Loading => write!(f, "Loading tasks..."),
            SessionEvent::Loaded{success, counters} => match success {
                true => write!(f, "Tasks loaded ({} completed)", counters),
                false => write!(f, "Unable to load tasks"),
            },
            SessionEvent::Changed{counters} => write!(f, "{} completed", counters),
        }
    }
}

impl Default for SessionEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}


/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<SessionEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<SessionEvent>;

/// Create a feeback channel, that can be used to know when a session must be displayed again
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(SessionEvent::default())
}
