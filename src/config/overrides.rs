//! Command-line overrides applied on top of the config file.

use clap::Args;
use std::path::PathBuf;

use crate::config::schema::MonitorConfig;

#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Service source file (`name,url` rows)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Number of concurrent probe workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Seconds between health check rounds
    #[arg(long)]
    pub frequency: Option<u64>,

    /// Connection timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Results kept per service
    #[arg(long)]
    pub history: Option<usize>,

    /// Listener address, e.g. ":8080"
    #[arg(long)]
    pub bind: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut MonitorConfig) {
        if let Some(source) = &self.source {
            config.services.source = source.clone();
        }
        if let Some(workers) = self.workers {
            config.health_check.max_workers = workers;
        }
        if let Some(frequency) = self.frequency {
            config.health_check.interval_secs = frequency;
        }
        if let Some(timeout) = self.timeout {
            config.health_check.timeout_secs = timeout;
        }
        if let Some(history) = self.history {
            config.services.history_length = history;
        }
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
    }
}
