//! Setup event log.
//!
//! Each completed run appends one NDJSON line to
//! `<log_dir>/project_init.ndjson`, recording who set the project up, when,
//! and where everything was put.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: always `setup` for now
//! - `actor`: `user@HOST`
//! - `project`: the project name
//! - `details`: paths and generated file names

use crate::error::{InitError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the event log inside the log directory.
pub const EVENTS_FILE_NAME: &str = "project_init.ndjson";

/// Actions that can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Project skeleton written.
    Setup,
}

/// An event record for the setup log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    pub project: String,
    pub details: Value,
}

impl Event {
    /// Create an event stamped with the current time and actor.
    pub fn new(action: EventAction, project: impl Into<String>) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            project: project.into(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the event log for a log directory.
pub fn events_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(EVENTS_FILE_NAME)
}

/// Append `event` as one line to the log in `log_dir`, creating the file if needed.
pub fn append_event(log_dir: &Path, event: &Event) -> Result<()> {
    let events_file = events_file_path(log_dir);

    let json_line = serde_json::to_string(event).map_err(|e| {
        InitError::io(
            "failed to serialize event for",
            &events_file,
            std::io::Error::other(e),
        )
    })?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| InitError::io("failed to open events file", &events_file, e))?;

    writeln!(file, "{}", json_line)
        .map_err(|e| InitError::io("failed to write event to", &events_file, e))?;

    Ok(())
}
