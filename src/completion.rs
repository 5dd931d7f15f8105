//! Completion counters, derived from a set of tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// How many tasks there are, and how many of them are completed.
///
/// These are always computed from scratch over a set of tasks, see [`CompletionCounters::from_tasks`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCounters {
    total: usize,
    completed: usize,
}

impl CompletionCounters {
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        tasks.into_iter().fold(Self::default(), |mut counters, task| {
            counters.total += 1;
            if task.completed() {
                counters.completed += 1;
            }
            counters
        })
    }

    pub fn total(&self) -> usize     { self.total     }
    pub fn completed(&self) -> usize { self.completed }
    pub fn remaining(&self) -> usize { self.total - self.completed }
}

/// Renders as `completed/total`
impl Display for CompletionCounters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}
