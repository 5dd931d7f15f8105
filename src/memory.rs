//! A [`SyncGateway`] that keeps its records in memory
//!
//! It behaves like a backend would (records are kept in their wire format), which makes it useful for offline sessions and tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::SyncError;
use crate::mock_behaviour::MockBehaviour;
use crate::task::Task;
use crate::traits::SyncGateway;
use crate::wire::{self, RawTask};

/// An in-memory task backend
#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: Mutex<Vec<RawTask>>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that already contains these records
    pub fn with_records(records: Vec<RawTask>) -> Self {
        Self {
            records: Mutex::new(records),
            mock_behaviour: None,
        }
    }

    /// Make this gateway fail (or succeed) as described by `behaviour`
    pub fn set_mock_behaviour(&mut self, behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = behaviour;
    }

    /// A copy of the records stored so far
    pub fn records(&self) -> Vec<RawTask> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn check(&self, action: fn(&mut MockBehaviour) -> Result<(), SyncError>) -> Result<(), SyncError> {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(behaviour) => {
                let mut behaviour = behaviour.lock()
                    .map_err(|_| SyncError::Mocked("mock behaviour is poisoned".to_string()))?;
                action(&mut behaviour)
            }
        }
    }
}

#[async_trait]
impl SyncGateway for MemoryGateway {
    async fn fetch_all(&self) -> Result<Vec<Task>, SyncError> {
        self.check(MockBehaviour::can_fetch_all)?;

        let mut tasks = Vec::new();
        for record in self.records() {
            match wire::parse(&record, &Utc) {
                Ok(task) => tasks.push(task),
                Err(err) => log::warn!("Ignoring an invalid record: {}", err),
            }
        }
        Ok(tasks)
    }

    async fn persist(&self, task: &Task) -> Result<(), SyncError> {
        self.check(MockBehaviour::can_persist)?;

        let record = wire::build(task, &Utc);
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
        Ok(())
    }
}
