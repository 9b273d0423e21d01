//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe.rs, scheduler.rs, report
//!     → logging.rs (structured log events to stderr)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stderr)
//!     → GET /metrics on the HTTP listener (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
