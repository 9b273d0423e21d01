//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logs
//! - `RUST_LOG` wins over the configured level
//! - Logs go to stderr; stdout belongs to the summary display

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level.
pub fn default_directive(log_level: &str) -> String {
    format!("service_monitor={log_level},tower_http={log_level}")
}

/// Initialize the global subscriber.
pub fn init_logging(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive(log_level).into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
