//! This module provides the in-memory collection of tasks a session works on

use chrono::NaiveDate;

use crate::calendar::is_same_month;
use crate::completion::CompletionCounters;
use crate::error::Error;
use crate::task::{Hour, Task, TaskId};

/// The tasks of a session, in insertion order.
///
/// The completion counters are refreshed by a full recount after every mutation, so that they can never drift from the actual contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    counters: CompletionCounters,
    /// The greatest ID known to this store, used to keep new IDs unique
    last_id: Option<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content of this store
    pub fn load(&mut self, initial: Vec<Task>) {
        log::debug!("Loading {} tasks (replacing {})", initial.len(), self.tasks.len());
        self.last_id = initial.iter().map(|t| t.id()).max();
        self.tasks = initial;
        self.refresh_counters();
    }

    /// Create a new uncompleted task and append it to this store.
    ///
    /// In case `text` is blank, this returns an [`Error::Validation`] and the store is left untouched.
    /// The same goes with [`Error::IdsExhausted`], in case the store already holds the greatest possible ID.
    /// This does not sync anything, see [`Session::add_task`](crate::session::Session::add_task) for that.
    pub fn add(&mut self, text: String, hour: Hour, date: NaiveDate) -> Result<Task, Error> {
        let id = TaskId::generate(self.last_id)?;
        let task = Task::new(id, text, hour, date)?;

        self.last_id = Some(id);
        self.tasks.push(task.clone());
        self.refresh_counters();
        log::debug!("Added task {} on {}", id, date);
        Ok(task)
    }

    /// Flip the completion status of a task, and return its updated version
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Task, Error> {
        let task = match self.tasks.iter_mut().find(|t| t.id() == id) {
            None => return Err(Error::NotFound(id)),
            Some(t) => t,
        };
        task.toggle_completion();
        let updated = task.clone();

        self.refresh_counters();
        Ok(updated)
    }

    /// The tasks scheduled on this very day
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|t| t.date() == date)
            .collect()
    }

    /// The tasks scheduled in the same year and month as `month_ref`
    pub fn tasks_for_month(&self, month_ref: NaiveDate) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|t| is_same_month(t.date(), month_ref))
            .collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counters over every task of this store, whatever their month
    pub fn counters(&self) -> CompletionCounters {
        self.counters
    }

    fn refresh_counters(&mut self) {
        self.counters = CompletionCounters::from_tasks(&self.tasks);
    }
}
