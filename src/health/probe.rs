//! HTTP probing.
//!
//! # Responsibilities
//! - Issue one GET per probe with a bounded connect phase
//! - Turn every transport failure into the synthetic `UNREACHABLE_STATUS`
//!
//! # Known Limitation
//! Only connection establishment is bounded. A peer that accepts the
//! connection but never answers keeps the worker busy until it does.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::observability::metrics;

/// Status recorded when the service could not be reached at all.
pub const UNREACHABLE_STATUS: u16 = 503;

/// Executes a single probe and always yields a status code.
pub trait Prober: Send + Sync + 'static {
    fn probe(&self, url: &str) -> impl Future<Output = u16> + Send;
}

/// `Prober` backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build a prober whose connections must be established within `connect_timeout`.
    pub fn new(connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(concat!("service-monitor/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()?;
        Ok(Self { client })
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> u16 {
        let start = Instant::now();
        let status = match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                // Dropping the response releases the body without reading it.
                drop(response);
                tracing::debug!(url = %url, status, "Probe completed");
                status
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Probe failed, service unreachable");
                metrics::record_probe_failure();
                UNREACHABLE_STATUS
            }
        };
        metrics::record_probe(status, start.elapsed());
        status
    }
}
