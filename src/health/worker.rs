//! Probe worker pool.
//!
//! # Responsibilities
//! - Run a fixed number of long-lived workers draining the work queue
//! - Write each result into the owning record under that record's lock
//!
//! # Design Decisions
//! - Workers only stop when the queue is closed and drained
//! - Probe failures never reach the worker loop (see probe.rs)

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::health::probe::Prober;
use crate::health::queue::WorkReceiver;
use crate::services::ServiceRegistry;

/// Fixed set of probe workers.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `workers` tasks sharing `queue`.
    pub fn spawn<P: Prober>(
        workers: usize,
        prober: Arc<P>,
        services: Arc<ServiceRegistry>,
        queue: WorkReceiver,
    ) -> Self {
        let handles = (0..workers)
            .map(|id| {
                let prober = prober.clone();
                let services = services.clone();
                let queue = queue.clone();
                tokio::spawn(async move { run_worker(id, prober, services, queue).await })
            })
            .collect();

        tracing::info!(workers, "Worker pool started");
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every worker to finish. Returns once the queue is closed and drained.
    pub async fn join(self) {
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Worker task failed");
            }
        }
    }

    /// Wait up to `grace` for the workers to drain, then abort the rest.
    pub async fn shutdown(self, grace: Duration) {
        let aborts: Vec<_> = self.handles.iter().map(|h| h.abort_handle()).collect();
        if tokio::time::timeout(grace, self.join()).await.is_err() {
            tracing::warn!(grace = ?grace, "Workers still probing after grace period, aborting");
            for abort in aborts {
                abort.abort();
            }
        }
    }
}

async fn run_worker<P: Prober>(
    id: usize,
    prober: Arc<P>,
    services: Arc<ServiceRegistry>,
    queue: WorkReceiver,
) {
    while let Some(request) = queue.pop().await {
        let status = prober.probe(&request.url).await;

        match services.get(request.service_index) {
            Some(record) => record.record_result(status, Utc::now()),
            None => tracing::warn!(
                worker = id,
                index = request.service_index,
                "Probe request for unknown service index"
            ),
        }
    }

    tracing::debug!(worker = id, "Work queue closed, worker exiting");
}
