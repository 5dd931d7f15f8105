//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Base URL of the task backend, used by [`Client::from_config`](crate::client::Client::from_config).
/// Feel free to override it when initing this library.
pub static BASE_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("https://calendar-backend-o918.onrender.com".to_string())));

/// The hour slot pre-selected for new tasks.
/// Feel free to override it when initing this library.
pub static DEFAULT_HOUR: Lazy<Arc<Mutex<u8>>> = Lazy::new(|| Arc::new(Mutex::new(0)));

/// Returns the currently configured base URL
pub fn base_url() -> String {
    match BASE_URL.lock() {
        Ok(url) => url.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the currently configured default hour
pub fn default_hour() -> u8 {
    match DEFAULT_HOUR.lock() {
        Ok(hour) => *hour,
        Err(poisoned) => *poisoned.into_inner(),
    }
}
