//! HTTP listener subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, trace layer)
//!     → read-locked snapshots of the service registry
//!     → text report / JSON / Prometheus text
//! ```
//!
//! The listener never writes to service records.

pub mod server;

pub use server::{router, serve, AppState};
