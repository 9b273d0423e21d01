//! Concurrent probing engine.
//!
//! # Data Flow
//! ```text
//! scheduler.rs (tick: immediately, then every interval)
//!     → queue.rs (bounded, producer waits when full)
//!     → worker.rs (N workers, one request each at a time)
//!     → probe.rs (GET, transport failure → 503)
//!     → ServiceRecord::record_result (per-record write lock)
//!
//! After each tick's enqueue:
//!     scheduler.rs → report::SummaryReporter::publish
//! ```
//!
//! # Design Decisions
//! - No global lock: workers only touch the record they are probing
//! - Probe failures are data, not errors
//! - A tick emits at most one request per service, so a service is not
//!   probed twice concurrently under normal cadence
//! - Results are recorded in completion order, not issue order

pub mod probe;
pub mod queue;
pub mod scheduler;
pub mod worker;

pub use probe::{HttpProber, Prober, UNREACHABLE_STATUS};
pub use queue::{work_queue, ProbeRequest, QueueClosed, WorkReceiver, WorkSender};
pub use scheduler::Scheduler;
pub use worker::WorkerPool;
