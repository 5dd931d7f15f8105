//! This module provides the state of a calendar session: the tasks, the displayed month, and the link to the remote gateway
//!
//! A [`Session`] applies every user action locally first, and forwards it to its [`SyncGateway`] in the background.
//! The local state is always the one to display, whatever the outcome of the remote calls.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::calendar::{self, CalendarDay, MonthGrid};
use crate::completion::CompletionCounters;
use crate::error::{Error, SyncError};
use crate::store::TaskStore;
use crate::task::{Hour, Task, TaskId};
use crate::traits::SyncGateway;

pub mod feedback;
pub use feedback::feedback_channel;
use feedback::{FeedbackSender, SessionEvent};

/// A calendar session, from its creation to the moment it is dropped
#[derive(Debug)]
pub struct Session<G>
where
    G: SyncGateway + Send + Sync + 'static,
{
    gateway: Arc<G>,
    store: TaskStore,
    /// The first day of the displayed month
    displayed_month: NaiveDate,
    today: NaiveDate,

    feedback_channel: Option<FeedbackSender>,
}

impl<G> Session<G>
where
    G: SyncGateway + Send + Sync + 'static,
{
    /// Create a session with an empty store, displaying the month of `today`.
    ///
    /// Call [`Self::load_initial`] to fetch the existing tasks.
    pub fn new(gateway: G, today: NaiveDate) -> Self {
        Self {
            gateway: Arc::new(gateway),
            store: TaskStore::new(),
            displayed_month: calendar::first_of_month(today),
            today,
            feedback_channel: None,
        }
    }

    /// Same as [`Self::new`], but events will be sent to `feedback_sender` whenever the session changes
    pub fn with_feedback(gateway: G, today: NaiveDate, feedback_sender: FeedbackSender) -> Self {
        let mut session = Self::new(gateway, today);
        session.feedback_channel = Some(feedback_sender);
        session
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Fetch every task from the gateway and replace the local ones with them.
    ///
    /// In case the gateway fails, the local tasks are kept as they are (and the error is logged).
    /// Returns whether the load was successful.
    pub async fn load_initial(&mut self) -> bool {
        self.feedback(SessionEvent::Loading);

        let success = match self.gateway.fetch_all().await {
            Err(err) => {
                log::warn!("Unable to fetch tasks: {}. Keeping the {} local ones", err, self.store.len());
                false
            },
            Ok(tasks) => {
                log::info!("Loaded {} tasks", tasks.len());
                self.store.load(tasks);
                true
            },
        };

        let counters = self.store.counters();
        self.feedback(SessionEvent::Loaded{ success, counters });
        success
    }

    /// Create a task and send it to the gateway.
    ///
    /// The task is added locally at once. Sending it to the gateway happens in the background;
    /// its outcome is logged, and can be awaited with the returned [`PendingWrite`]. A failure never removes the local task.
    ///
    /// Outside of a tokio runtime, nothing is sent and the [`PendingWrite`] resolves to [`SyncError::Aborted`].
    pub fn add_task(&mut self, text: String, hour: Hour, date: NaiveDate) -> Result<(Task, PendingWrite), Error> {
        let task = match self.store.add(text, hour, date) {
            Err(err) => {
                log::info!("Task not created: {}", err);
                return Err(err);
            },
            Ok(t) => t,
        };
        self.feedback(SessionEvent::Changed{ counters: self.store.counters() });

        let pending = self.spawn_persist(task.clone());
        Ok((task, pending))
    }

    fn spawn_persist(&self, task: Task) -> PendingWrite {
        let gateway = Arc::clone(&self.gateway);
        let (sender, receiver) = oneshot::channel();

        let runtime = match Handle::try_current() {
            Err(err) => {
                log::warn!("Task {} will not be posted: {}", task.id(), err);
                // Dropping the sender aborts the pending write
                return PendingWrite { receiver };
            },
            Ok(handle) => handle,
        };

        runtime.spawn(async move {
            let result = gateway.persist(&task).await;
            match &result {
                Err(err) => log::warn!("Error posting task {}: {}", task.id(), err),
                Ok(()) => log::debug!("Task {} has been posted", task.id()),
            }
            // The caller may not be interested in the outcome
            let _ = sender.send(result);
        });

        PendingWrite { receiver }
    }

    /// Flip the completion status of a task.
    ///
    /// This is a local change only.
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Task, Error> {
        match self.store.toggle_completion(id) {
            Err(err) => {
                log::warn!("Unable to toggle task: {}", err);
                Err(err)
            },
            Ok(task) => {
                self.feedback(SessionEvent::Changed{ counters: self.store.counters() });
                Ok(task)
            },
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Update the real-world date (e.g. after midnight). The displayed month is not changed.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// The first day of the displayed month
    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed_month
    }

    /// Display the month `date` is in
    pub fn show_month(&mut self, date: NaiveDate) {
        self.displayed_month = calendar::first_of_month(date);
    }

    pub fn show_next_month(&mut self) {
        self.displayed_month = calendar::next_month(self.displayed_month);
    }

    pub fn show_previous_month(&mut self) {
        self.displayed_month = calendar::previous_month(self.displayed_month);
    }

    /// The grid of the displayed month, without any task
    pub fn grid(&self) -> MonthGrid {
        calendar::build_grid(self.displayed_month, self.today)
    }

    /// Everything there is to display for the current month, at once
    pub fn view(&self) -> MonthView<'_> {
        let grid = self.grid();
        let cells = grid.iter()
            .map(|day| DayCell {
                day: *day,
                tasks: self.store.tasks_for_date(day.date()),
            })
            .collect();

        MonthView {
            month: grid.month(),
            cells,
            month_tasks: self.store.tasks_for_month(self.displayed_month),
            counters: self.store.counters(),
        }
    }

    /// Send an event as a feedback to the listener (if any).
    fn feedback(&self, event: SessionEvent) {
        if let Some(sender) = &self.feedback_channel {
            // Nobody may be listening anymore
            let _ = sender.send(event);
        }
    }
}


/// The outcome of sending a new task to the gateway
#[derive(Debug)]
pub struct PendingWrite {
    receiver: oneshot::Receiver<Result<(), SyncError>>,
}

impl PendingWrite {
    /// Wait until the gateway has handled the task
    pub async fn outcome(self) -> Result<(), SyncError> {
        match self.receiver.await {
            Ok(result) => result,
            Err(_) => Err(SyncError::Aborted),
        }
    }
}


/// A day of the displayed grid, along with the tasks scheduled on it
#[derive(Clone, Debug)]
pub struct DayCell<'a> {
    day: CalendarDay,
    tasks: Vec<&'a Task>,
}

impl<'a> DayCell<'a> {
    pub fn day(&self) -> &CalendarDay {
        &self.day
    }

    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Whether a task can be added on this day.
    /// Padding days from the adjacent months cannot be picked.
    pub fn is_selectable(&self) -> bool {
        self.day.is_current_month()
    }
}


/// A consistent snapshot of what to display for a month
#[derive(Clone, Debug)]
pub struct MonthView<'a> {
    month: NaiveDate,
    cells: Vec<DayCell<'a>>,
    month_tasks: Vec<&'a Task>,
    counters: CompletionCounters,
}

impl<'a> MonthView<'a> {
    /// The first day of the displayed month
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn cells(&self) -> &[DayCell<'a>] {
        &self.cells
    }

    /// Rows of 7 cells, from Monday to Sunday
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell<'a>> {
        self.cells.chunks(7)
    }

    /// The tasks of the displayed month, in insertion order
    pub fn month_tasks(&self) -> &[&'a Task] {
        &self.month_tasks
    }

    /// Counters over every task, not only the ones of the displayed month
    pub fn counters(&self) -> CompletionCounters {
        self.counters
    }
}
