//! Fleet summary computation.

use serde::Serialize;
use std::fmt::Write;

use crate::services::{ServiceRegistry, ServiceView};

const SEPARATOR: &str = "---------------------------------------------------------";

/// Classification of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Unprobed,
    Healthy,
    Missing,
    Broken,
    Unresponsive,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status / 100 {
            0 => StatusClass::Unprobed,
            2 => StatusClass::Healthy,
            4 => StatusClass::Missing,
            5 => StatusClass::Broken,
            _ => StatusClass::Unresponsive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Unprobed => "unprobed",
            StatusClass::Healthy => "healthy",
            StatusClass::Missing => "missing",
            StatusClass::Broken => "broken",
            StatusClass::Unresponsive => "unresponsive",
        }
    }
}

/// Service counts by status class. The classes partition `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub healthy: usize,
    pub missing: usize,
    pub broken: usize,
    pub unresponsive: usize,
    pub unprobed: usize,
}

impl Summary {
    pub fn from_statuses(statuses: impl IntoIterator<Item = u16>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match StatusClass::of(status) {
                StatusClass::Unprobed => summary.unprobed += 1,
                StatusClass::Healthy => summary.healthy += 1,
                StatusClass::Missing => summary.missing += 1,
                StatusClass::Broken => summary.broken += 1,
                StatusClass::Unresponsive => summary.unresponsive += 1,
            }
        }
        summary
    }

    pub fn from_views(views: &[ServiceView]) -> Self {
        Self::from_statuses(views.iter().map(|v| v.status))
    }
}

/// Snapshot the registry and format the report.
pub fn build_report(services: &ServiceRegistry) -> String {
    format_report(&services.views(), services.history_length())
}

/// Format the aggregate counts followed by one line per service.
pub fn format_report(views: &[ServiceView], history_length: usize) -> String {
    let summary = Summary::from_views(views);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "SERVICE MONITOR\n");
    let _ = writeln!(out, "Total Services: {}", summary.total);
    let _ = writeln!(out, "Total Healthy Services(200): {}", summary.healthy);
    let _ = writeln!(out, "Total Missing Services(400): {}", summary.missing);
    let _ = writeln!(out, "Total Broken Services(500): {}", summary.broken);
    let _ = writeln!(out, "Total Unresponsive Services: {}", summary.unresponsive);
    let _ = writeln!(out, "Total Unprobed Services: {}", summary.unprobed);
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(
        out,
        "SERVICE \t|\t CURRENT STATUS \t|\t HISTORY(Last {history_length} Responses)"
    );

    for view in views {
        let _ = write!(out, "{}    \t|\t\t{}\t\t", view.name, view.status);
        for entry in &view.history {
            let _ = write!(out, "|{}", entry.status);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ServiceSpec, StatusEntry};
    use chrono::Utc;

    fn view(name: &str, status: u16, history: &[u16]) -> ServiceView {
        let now = Utc::now();
        ServiceView {
            name: name.to_string(),
            url: format!("http://{name}"),
            status,
            history: history.iter().map(|&status| StatusEntry { status, time: now }).collect(),
        }
    }

    #[test]
    fn test_status_classes() {
        assert_eq!(StatusClass::of(0), StatusClass::Unprobed);
        assert_eq!(StatusClass::of(204), StatusClass::Healthy);
        assert_eq!(StatusClass::of(404), StatusClass::Missing);
        assert_eq!(StatusClass::of(503), StatusClass::Broken);
        assert_eq!(StatusClass::of(301), StatusClass::Unresponsive);
        assert_eq!(StatusClass::of(101), StatusClass::Unresponsive);
    }

    #[test]
    fn test_counts_partition_total() {
        let statuses = [0, 200, 201, 302, 404, 418, 500, 503, 0, 100, 299];
        let s = Summary::from_statuses(statuses);
        assert_eq!(s.total, statuses.len());
        assert_eq!(s.healthy + s.missing + s.broken + s.unresponsive + s.unprobed, s.total);
        assert_eq!(s.healthy, 3);
        assert_eq!(s.missing, 2);
        assert_eq!(s.broken, 2);
        assert_eq!(s.unresponsive, 2);
        assert_eq!(s.unprobed, 2);
    }

    #[test]
    fn test_report_counts_and_rows() {
        let views = vec![view("a", 200, &[200]), view("b", 500, &[404, 500])];
        let report = format_report(&views, 6);

        assert!(report.starts_with("SERVICE MONITOR\n\n"));
        assert!(report.contains("Total Services: 2\n"));
        assert!(report.contains("Total Healthy Services(200): 1\n"));
        assert!(report.contains("Total Broken Services(500): 1\n"));
        assert!(report.contains("Total Missing Services(400): 0\n"));
        assert!(report.contains("HISTORY(Last 6 Responses)"));
        assert!(report.contains("a    \t|\t\t200\t\t|200\n"));
        assert!(report.contains("b    \t|\t\t500\t\t|404|500\n"));
    }

    #[test]
    fn test_report_for_unprobed_registry() {
        let registry = ServiceRegistry::new(vec![ServiceSpec::new("a", "http://x")], 3);
        let report = build_report(&registry);
        assert!(report.contains("Total Unprobed Services: 1\n"));
        assert!(report.contains("HISTORY(Last 3 Responses)"));
        assert!(report.ends_with("a    \t|\t\t0\t\t\n"));
    }
}
