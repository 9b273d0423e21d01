//! Per-service status record.
//!
//! # Responsibilities
//! - Hold the immutable identity of one monitored endpoint
//! - Track the last observed status and a bounded history window
//!
//! # Design Decisions
//! - Every record owns its own `RwLock`; there is no registry-wide lock
//! - Status and history are updated under a single write acquisition
//! - Guards are never held across an `.await`

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

/// Status reported for a service that has not been probed yet.
pub const NEVER_PROBED: u16 = 0;

/// A single probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub status: u16,
    pub time: DateTime<Utc>,
}

/// Consistent copy of a record's mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Last observed status (`NEVER_PROBED` until the first result).
    pub status: u16,
    /// Oldest first, most recent last.
    pub history: Vec<StatusEntry>,
}

#[derive(Debug)]
struct RecordState {
    status: u16,
    history: VecDeque<StatusEntry>,
}

/// A monitored endpoint.
#[derive(Debug)]
pub struct ServiceRecord {
    name: String,
    url: String,
    history_length: usize,
    state: RwLock<RecordState>,
}

impl ServiceRecord {
    /// Create a record that retains at most `history_length` results.
    pub fn new(name: impl Into<String>, url: impl Into<String>, history_length: usize) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            history_length,
            state: RwLock::new(RecordState {
                status: NEVER_PROBED,
                history: VecDeque::with_capacity(history_length + 1),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn history_length(&self) -> usize {
        self.history_length
    }

    /// Append a result, evict from the front past the bound, then set the status.
    pub fn record_result(&self, status: u16, time: DateTime<Utc>) {
        // A poisoned guard still holds a complete value: every mutation below
        // finishes before the guard is released.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.history.push_back(StatusEntry { status, time });
        while state.history.len() > self.history_length {
            state.history.pop_front();
        }
        state.status = status;
    }

    /// Copy the current status and history under a read lock.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            status: state.status,
            history: state.history.iter().copied().collect(),
        }
    }
}
