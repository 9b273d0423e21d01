//! Service Health Monitor (v1)
//!
//! Periodically probes a fixed list of HTTP services and keeps a short
//! status history for each of them.
//!
//! # Architecture Overview
//!
//! ```text
//!                   ┌──────────────────────────────────────────────────────┐
//!                   │                  SERVICE MONITOR                      │
//!                   │                                                       │
//!   target.csv ─────┼─▶ services::source ──▶ ServiceRegistry (N records)    │
//!                   │                              ▲          │             │
//!                   │   ┌───────────┐   ┌───────┐  │ write    │ read        │
//!                   │   │ scheduler │──▶│ queue │──┼─▶ workers│             │
//!                   │   │  (tick)   │   └───────┘  │  (probe) │             │
//!                   │   └─────┬─────┘              │     │    ▼             │
//!                   │         │ after enqueue      │     │  report ─▶ stdout│
//!                   │         └────────────────────┼─────┼──▶              │
//!                   │                              │     ▼                  │
//!   Services ◀──────┼──────────── GET ─────────────┼── HttpProber           │
//!                   │                              │                        │
//!   Operators ──────┼─▶ http listener (/, /services, /health, /metrics)    │
//!                   └──────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use service_monitor::config::{resolve_config, Overrides};
use service_monitor::lifecycle::signals::shutdown_on_signal;
use service_monitor::observability::logging;
use service_monitor::{Monitor, Shutdown};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), &cli.overrides)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("service-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    let metrics_enabled = config.observability.metrics_enabled;
    let mut monitor = Monitor::from_config(config).inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })?;
    if metrics_enabled {
        monitor = monitor.install_metrics()?;
    }

    let shutdown = Shutdown::new();
    let running = monitor.start(&shutdown).await.inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })?;
    tokio::spawn(shutdown_on_signal(shutdown));

    running.wait().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
