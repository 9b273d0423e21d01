//! Bounded work queue between the scheduler and the worker pool.
//!
//! # Design Decisions
//! - Bounded `mpsc` channel: a full queue suspends the producer, work is
//!   never dropped
//! - The single receiver is shared by all workers behind an async mutex;
//!   a worker holds it only while waiting for the next request

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

/// One unit of work: probe the service at `service_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub url: String,
    pub service_index: usize,
}

impl ProbeRequest {
    pub fn new(service_index: usize, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_index,
        }
    }
}

/// The receiving side has gone away.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("work queue closed")]
pub struct QueueClosed;

/// Create a work queue holding at most `capacity` pending requests.
pub fn work_queue(capacity: usize) -> (WorkSender, WorkReceiver) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        WorkSender { inner: tx },
        WorkReceiver {
            inner: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Producer handle.
#[derive(Debug, Clone)]
pub struct WorkSender {
    inner: mpsc::Sender<ProbeRequest>,
}

impl WorkSender {
    /// Enqueue a request, waiting for space if the queue is full.
    pub async fn push(&self, request: ProbeRequest) -> Result<(), QueueClosed> {
        self.inner.send(request).await.map_err(|_| QueueClosed)
    }

    /// Free slots right now.
    pub fn available(&self) -> usize {
        self.inner.capacity()
    }

    pub fn max_capacity(&self) -> usize {
        self.inner.max_capacity()
    }
}

/// Consumer handle, cloned into every worker.
#[derive(Debug, Clone)]
pub struct WorkReceiver {
    inner: Arc<Mutex<mpsc::Receiver<ProbeRequest>>>,
}

impl WorkReceiver {
    /// Wait for the next request. `None` once every sender is dropped and
    /// the queue is drained.
    pub async fn pop(&self) -> Option<ProbeRequest> {
        self.inner.lock().await.recv().await
    }
}
