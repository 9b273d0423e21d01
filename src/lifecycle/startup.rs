//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the service source and build the probe client
//! - Bind the listener, then start workers, scheduler and HTTP serving
//! - Tear the pipeline down in order once shutdown is triggered
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and nothing is left running
//! - The listener is bound before any worker starts
//! - Shutdown order: listener and scheduler stop, the queue closes,
//!   workers drain (bounded by a grace period)

use metrics_exporter_prometheus::{BuildError, PrometheusHandle};
use std::io;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::{validate_config, ConfigError, MonitorConfig};
use crate::health::{work_queue, HttpProber, Prober, Scheduler, WorkerPool};
use crate::http::{self, AppState};
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::report::{Renderer, SummaryReporter, TerminalRenderer};
use crate::services::{load_services, ServiceRegistry, ServiceSpec, SourceError};

/// Errors that stop the monitor.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load services: {0}")]
    Source(#[from] SourceError),

    #[error("failed to build probe client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to install metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    #[error("invalid listener address '{address}': {source}")]
    Address {
        address: String,
        source: AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Bind { address: SocketAddr, source: io::Error },

    #[error("HTTP listener failed: {0}")]
    Listener(#[source] io::Error),
}

/// A fully loaded monitor that has not started any task yet.
pub struct Monitor<P: Prober = HttpProber> {
    config: MonitorConfig,
    services: Arc<ServiceRegistry>,
    prober: Arc<P>,
    renderer: Box<dyn Renderer>,
    metrics: Option<PrometheusHandle>,
}

impl Monitor<HttpProber> {
    /// Validate the config, load the service source and build the HTTP prober.
    pub fn from_config(config: MonitorConfig) -> Result<Self, MonitorError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let specs = load_services(&config.services.source)?;
        let prober = HttpProber::new(config.health_check.connect_timeout())?;
        Self::with_prober(config, specs, prober)
    }
}

impl<P: Prober> Monitor<P> {
    /// Build a monitor around `prober`. Rejects configs that fail validation.
    pub fn with_prober(config: MonitorConfig, specs: Vec<ServiceSpec>, prober: P) -> Result<Self, MonitorError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let services = Arc::new(ServiceRegistry::new(specs, config.services.history_length));
        let renderer = Box::new(TerminalRenderer::new(config.report.clear_screen));
        Ok(Self {
            config,
            services,
            prober: Arc::new(prober),
            renderer,
            metrics: None,
        })
    }

    /// Replace the terminal renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Serve metrics from `handle` at `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Install the process-wide Prometheus recorder and serve it at `/metrics`.
    pub fn install_metrics(self) -> Result<Self, MonitorError> {
        let handle = metrics::init_metrics()?;
        Ok(self.with_metrics(handle))
    }

    pub fn services(&self) -> Arc<ServiceRegistry> {
        self.services.clone()
    }

    /// Bind the listener and spawn every task.
    pub async fn start(self, shutdown: &Shutdown) -> Result<RunningMonitor, MonitorError> {
        let Self {
            config,
            services,
            prober,
            renderer,
            metrics,
        } = self;

        let address = config
            .listener
            .socket_addr()
            .map_err(|source| MonitorError::Address {
                address: config.listener.bind_address.clone(),
                source,
            })?;
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| MonitorError::Bind { address, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| MonitorError::Bind { address, source })?;

        let health = &config.health_check;
        tracing::info!(
            services = services.len(),
            workers = health.max_workers,
            interval_secs = health.interval_secs,
            timeout_secs = health.timeout_secs,
            history_length = services.history_length(),
            address = %local_addr,
            "Starting monitor"
        );

        let (queue_tx, queue_rx) = work_queue(health.queue_capacity());
        let pool = WorkerPool::spawn(health.max_workers, prober, services.clone(), queue_rx);

        let reporter = SummaryReporter::new(services.clone(), renderer);
        let scheduler = Scheduler::new(services.clone(), queue_tx, reporter, health.interval());
        let scheduler = tokio::spawn(scheduler.run(shutdown.subscribe()));

        let state = AppState {
            services: services.clone(),
            metrics,
        };
        let server = tokio::spawn(http::serve(listener, state, shutdown.subscribe()));

        Ok(RunningMonitor {
            local_addr,
            services,
            shutdown: shutdown.clone(),
            server,
            scheduler,
            pool,
            drain_grace: health.connect_timeout(),
        })
    }
}

/// Handles to a started monitor.
pub struct RunningMonitor {
    local_addr: SocketAddr,
    services: Arc<ServiceRegistry>,
    shutdown: Shutdown,
    server: JoinHandle<Result<(), io::Error>>,
    scheduler: JoinHandle<()>,
    pool: WorkerPool,
    drain_grace: Duration,
}

impl RunningMonitor {
    /// Address the HTTP listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn services(&self) -> &Arc<ServiceRegistry> {
        &self.services
    }

    /// Run until shutdown. A listener failure stops the whole monitor.
    pub async fn wait(self) -> Result<(), MonitorError> {
        let served = match self.server.await {
            Ok(result) => result.map_err(MonitorError::Listener),
            Err(e) => Err(MonitorError::Listener(io::Error::other(e))),
        };
        if served.is_err() && !self.shutdown.is_triggered() {
            tracing::error!("HTTP listener stopped unexpectedly, shutting down");
            self.shutdown.trigger();
        }

        if let Err(e) = self.scheduler.await {
            tracing::error!(error = %e, "Scheduler task failed");
        }
        self.pool.shutdown(self.drain_grace).await;

        tracing::info!("Monitor stopped");
        served
    }
}
