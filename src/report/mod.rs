//! Summary reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler tick (after enqueue)
//!     → SummaryReporter::publish
//!     → summary.rs (read-locked snapshots → counts + rows)
//!     → metrics gauges
//!     → render.rs (terminal redraw, errors logged only)
//! ```
//!
//! # Design Decisions
//! - Building the report is pure; displaying it is a side effect behind a trait
//! - The report may mix results from the current and the previous tick

pub mod render;
pub mod summary;

pub use render::{Renderer, TerminalRenderer};
pub use summary::{build_report, format_report, StatusClass, Summary};

use std::sync::Arc;

use crate::observability::metrics;
use crate::services::ServiceRegistry;

/// Builds and displays the fleet summary.
pub struct SummaryReporter {
    services: Arc<ServiceRegistry>,
    renderer: Box<dyn Renderer>,
}

impl SummaryReporter {
    pub fn new(services: Arc<ServiceRegistry>, renderer: Box<dyn Renderer>) -> Self {
        Self { services, renderer }
    }

    pub fn build_report(&self) -> String {
        build_report(&self.services)
    }

    /// Build the report, update gauges and hand it to the renderer.
    pub fn publish(&self) -> String {
        let views = self.services.views();
        let summary = Summary::from_views(&views);
        let report = format_report(&views, self.services.history_length());

        metrics::record_summary(&summary);
        if let Err(e) = self.renderer.render(&report) {
            tracing::warn!(error = %e, "Failed to render summary");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceSpec;
    use chrono::Utc;
    use std::io;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Renderer for Capture {
        fn render(&self, report: &str) -> io::Result<()> {
            self.0.lock().unwrap().push(report.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Renderer for Broken {
        fn render(&self, _report: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
        }
    }

    fn services() -> Arc<ServiceRegistry> {
        Arc::new(ServiceRegistry::new(
            vec![ServiceSpec::new("a", "http://x"), ServiceSpec::new("b", "http://y")],
            6,
        ))
    }

    #[test]
    fn test_publish_renders_built_report() {
        let services = services();
        services.get(0).unwrap().record_result(200, Utc::now());
        let rendered = Arc::new(Mutex::new(Vec::new()));
        let reporter = SummaryReporter::new(services, Box::new(Capture(rendered.clone())));

        let report = reporter.publish();
        assert_eq!(rendered.lock().unwrap().as_slice(), &[report.clone()]);
        assert_eq!(report, reporter.build_report());
        assert!(report.contains("Total Healthy Services(200): 1"));
    }

    #[test]
    fn test_render_failure_is_not_fatal() {
        let reporter = SummaryReporter::new(services(), Box::new(Broken));
        let report = reporter.publish();
        assert!(report.contains("Total Services: 2"));
    }
}
