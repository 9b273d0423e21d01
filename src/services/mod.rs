//! Monitored service collection.
//!
//! # Data Flow
//! ```text
//! service source (name,url rows)
//!     → source.rs (parse, validate, fail whole load on any bad row)
//!     → ServiceRegistry (fixed-size, index-addressed)
//!     → shared via Arc with workers, reporter and HTTP listener
//! ```
//!
//! # Design Decisions
//! - The registry is built once and never resized; probe requests refer to
//!   services by index
//! - Locking is per record (record.rs), the registry itself is immutable

pub mod record;
pub mod source;

pub use record::{ServiceRecord, Snapshot, StatusEntry, NEVER_PROBED};
pub use source::{load_services, parse_services, ServiceSpec, SourceError};

use serde::Serialize;

/// Fixed, index-stable collection of service records.
#[derive(Debug)]
pub struct ServiceRegistry {
    records: Box<[ServiceRecord]>,
    history_length: usize,
}

impl ServiceRegistry {
    /// Build the registry from the loaded service list.
    pub fn new(specs: Vec<ServiceSpec>, history_length: usize) -> Self {
        let records = specs
            .into_iter()
            .map(|spec| ServiceRecord::new(spec.name, spec.url, history_length))
            .collect();
        Self {
            records,
            history_length,
        }
    }

    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn history_length(&self) -> usize {
        self.history_length
    }

    /// Snapshot every record, one read lock at a time.
    pub fn views(&self) -> Vec<ServiceView> {
        self.records.iter().map(ServiceView::from_record).collect()
    }
}

/// Serializable view of one service at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceView {
    pub name: String,
    pub url: String,
    pub status: u16,
    pub history: Vec<StatusEntry>,
}

impl ServiceView {
    pub fn from_record(record: &ServiceRecord) -> Self {
        let Snapshot { status, history } = record.snapshot();
        Self {
            name: record.name().to_string(),
            url: record.url().to_string(),
            status,
            history,
        }
    }
}
