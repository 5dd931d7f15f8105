//! This module provides a client to connect to the task backend over HTTP

use async_trait::async_trait;
use chrono::Local;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::error::SyncError;
use crate::task::Task;
use crate::traits::SyncGateway;
use crate::wire::{self, RawTask};

/// A [`SyncGateway`] that talks to the task backend
///
/// * `GET {url}/tasks` returns every task
/// * `POST {url}/task` stores a new one
#[derive(Clone, Debug)]
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, SyncError> {
        let mut url = Url::parse(url.as_ref())?;
        // So that `join` appends to the path rather than replacing its last segment
        if url.path().ends_with('/') == false {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self{
            url,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the URL set in [`crate::config::BASE_URL`]
    pub fn from_config() -> Result<Self, SyncError> {
        Self::new(crate::config::base_url())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn endpoint(&self, name: &str) -> Result<Url, SyncError> {
        Ok(self.url.join(name)?)
    }
}

#[async_trait]
impl SyncGateway for Client {
    async fn fetch_all(&self) -> Result<Vec<Task>, SyncError> {
        let url = self.endpoint("tasks")?;
        log::debug!("Fetching tasks from {}", url);

        let response = self.http
            .get(url)
            .send()
            .await?;
        if response.status().is_success() == false {
            return Err(SyncError::Status(response.status()));
        }

        // Records are checked one by one, so that a single invalid record does not hide the others
        let values: Vec<serde_json::Value> = response.json().await?;
        let mut tasks = Vec::with_capacity(values.len());
        for value in values {
            let record: RawTask = match serde_json::from_value(value) {
                Err(err) => {
                    log::warn!("Ignoring a malformed task record: {}", err);
                    continue;
                },
                Ok(r) => r,
            };
            match wire::parse(&record, &Local) {
                Err(err) => log::warn!("Ignoring a task record: {}", err),
                Ok(task) => tasks.push(task),
            }
        }

        log::info!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn persist(&self, task: &Task) -> Result<(), SyncError> {
        let url = self.endpoint("task")?;
        let record = wire::build(task, &Local);
        log::debug!("Posting task {} to {}", task.id(), url);

        let response = self.http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&record)
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(SyncError::Status(response.status()));
        }
        Ok(())
    }
}
