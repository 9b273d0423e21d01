//! Periodic probe scheduling.
//!
//! # Responsibilities
//! - Tick immediately, then once per health-check interval
//! - Enqueue one probe per service, in registry order
//! - Publish the summary after each tick's enqueue finishes
//!
//! # Design Decisions
//! - Sole producer for the work queue; dropping the scheduler closes it
//! - Enqueue waits under backpressure, stretching the tick instead of
//!   dropping work
//! - Missed ticks are skipped, not replayed in a burst

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::health::queue::{ProbeRequest, QueueClosed, WorkSender};
use crate::observability::metrics;
use crate::report::SummaryReporter;
use crate::services::ServiceRegistry;

pub struct Scheduler {
    services: Arc<ServiceRegistry>,
    queue: WorkSender,
    reporter: SummaryReporter,
    interval: Duration,
}

impl Scheduler {
    pub fn new(
        services: Arc<ServiceRegistry>,
        queue: WorkSender,
        reporter: SummaryReporter,
        interval: Duration,
    ) -> Self {
        Self {
            services,
            queue,
            reporter,
            interval,
        }
    }

    /// Run ticks until shutdown or until the workers are gone.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval = ?self.interval,
            services = self.services.len(),
            queue_capacity = self.queue.max_capacity(),
            "Scheduler starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => break,
            }

            // A tick can wait on a full queue for as long as the workers are
            // stuck, so shutdown must interrupt the enqueue loop too.
            tokio::select! {
                result = self.tick() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Scheduler stopping");
                        return;
                    }
                }
                _ = shutdown.recv() => break,
            }
        }

        tracing::info!("Scheduler received shutdown signal, exiting loop");
    }

    /// Enqueue every service once, then publish the summary.
    pub async fn tick(&self) -> Result<(), QueueClosed> {
        for (index, record) in self.services.iter().enumerate() {
            if self.queue.available() == 0 {
                tracing::debug!(index, "Work queue full, waiting for workers");
            }
            self.queue.push(ProbeRequest::new(index, record.url())).await?;
        }

        metrics::record_tick();
        self.reporter.publish();
        Ok(())
    }
}
