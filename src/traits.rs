use async_trait::async_trait;

use crate::error::SyncError;
use crate::task::Task;

/// A remote place where tasks are stored (usually a server)
#[async_trait]
pub trait SyncGateway {
    /// Returns every task this source knows about.
    /// This is typically called once, when a session starts.
    async fn fetch_all(&self) -> Result<Vec<Task>, SyncError>;

    /// Store a newly created task.
    /// Callers do not wait for this before updating their local state, see [`Session::add_task`](crate::session::Session::add_task)
    async fn persist(&self, task: &Task) -> Result<(), SyncError>;
}
