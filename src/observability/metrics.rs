//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_probes_total` (counter): probe results by status class
//! - `monitor_probe_failures_total` (counter): transport failures recorded as 503
//! - `monitor_probe_duration_seconds` (histogram): probe latency
//! - `monitor_ticks_total` (counter): completed scheduling ticks
//! - `monitor_services` (gauge): services per status class at the last tick
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until a
//!   recorder is installed
//! - The Prometheus text is served by the HTTP listener, not a separate port

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

use crate::report::{StatusClass, Summary};

/// Install the global Prometheus recorder.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// Record a completed probe.
pub fn record_probe(status: u16, duration: Duration) {
    counter!("monitor_probes_total", "class" => StatusClass::of(status).as_str()).increment(1);
    histogram!("monitor_probe_duration_seconds").record(duration.as_secs_f64());
}

/// Record a probe whose transport failed.
pub fn record_probe_failure() {
    counter!("monitor_probe_failures_total").increment(1);
}

pub fn record_tick() {
    counter!("monitor_ticks_total").increment(1);
}

/// Publish per-class service counts.
pub fn record_summary(summary: &Summary) {
    gauge!("monitor_services", "class" => "total").set(summary.total as f64);
    gauge!("monitor_services", "class" => "healthy").set(summary.healthy as f64);
    gauge!("monitor_services", "class" => "missing").set(summary.missing as f64);
    gauge!("monitor_services", "class" => "broken").set(summary.broken as f64);
    gauge!("monitor_services", "class" => "unresponsive").set(summary.unresponsive as f64);
    gauge!("monitor_services", "class" => "unprobed").set(summary.unprobed as f64);
}
