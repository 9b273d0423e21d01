//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Every section has defaults, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration for the service monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Service source and history settings.
    pub services: ServicesConfig,

    /// Probe worker and cadence settings.
    pub health_check: HealthCheckConfig,

    /// HTTP listener settings.
    pub listener: ListenerConfig,

    /// Terminal summary settings.
    pub report: ReportConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Where the monitored services come from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    /// Path to the `name,url` source file.
    pub source: PathBuf,

    /// Number of results kept per service.
    pub history_length: usize,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("./target.csv"),
            history_length: 6,
        }
    }
}

/// Probe engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HealthCheckConfig {
    /// Number of concurrent probe workers.
    pub max_workers: usize,

    /// Seconds between scheduling ticks.
    pub interval_secs: u64,

    /// Connection establishment timeout in seconds.
    pub timeout_secs: u64,

    /// Queue capacity as a multiple of `max_workers`.
    pub queue_factor: usize,
}

impl Default for HealthCheckConfig {
    fn default() -> Self {
        Self {
            max_workers: 1024,
            interval_secs: 6,
            timeout_secs: 5,
            queue_factor: 10,
        }
    }
}

impl HealthCheckConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn queue_capacity(&self) -> usize {
        self.max_workers.saturating_mul(self.queue_factor)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080" or ":8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ListenerConfig {
    /// Resolve the bind address, treating a bare ":port" as all interfaces.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let address = self.bind_address.trim();
        if address.starts_with(':') {
            format!("0.0.0.0{address}").parse()
        } else {
            address.parse()
        }
    }
}

/// Terminal summary configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Clear the terminal before each redraw.
    pub clear_screen: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Serve Prometheus metrics at `/metrics`.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.services.source, PathBuf::from("./target.csv"));
        assert_eq!(config.services.history_length, 6);
        assert_eq!(config.health_check.max_workers, 1024);
        assert_eq!(config.health_check.interval(), Duration::from_secs(6));
        assert_eq!(config.health_check.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.health_check.queue_capacity(), 10 * 1024);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MonitorConfig = toml::from_str(
            r#"
            [health_check]
            max_workers = 8

            [services]
            source = "services.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.health_check.max_workers, 8);
        assert_eq!(config.health_check.interval_secs, 6);
        assert_eq!(config.services.source, PathBuf::from("services.csv"));
        assert_eq!(config.services.history_length, 6);
        assert_eq!(config.listener, ListenerConfig::default());
    }

    #[test]
    fn test_bare_port_binds_all_interfaces() {
        let listener = ListenerConfig {
            bind_address: ":8080".to_string(),
        };
        assert_eq!(listener.socket_addr().unwrap(), "0.0.0.0:8080".parse().unwrap());

        let listener = ListenerConfig {
            bind_address: "127.0.0.1:9000".to_string(),
        };
        assert_eq!(listener.socket_addr().unwrap().port(), 9000);

        let listener = ListenerConfig {
            bind_address: "localhost".to_string(),
        };
        assert!(listener.socket_addr().is_err());
    }
}
