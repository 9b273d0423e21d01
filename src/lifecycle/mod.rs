//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load services → Build prober → Bind listener → Workers → Scheduler → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Listener and scheduler stop → Queue closes → Workers drain
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{Monitor, MonitorError, RunningMonitor};
