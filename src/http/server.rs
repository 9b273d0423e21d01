//! HTTP listener.
//!
//! # Responsibilities
//! - Serve the text summary, per-service JSON and Prometheus metrics
//! - Answer liveness checks for the monitor itself
//! - Stop accepting on the shutdown signal
//!
//! # Endpoints
//! - `GET /` → text report (same format as the terminal summary)
//! - `GET /services` → JSON array of service snapshots
//! - `GET /health` → 200 while the process is up
//! - `GET /metrics` → Prometheus text, 404 when metrics are disabled

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::report::build_report;
use crate::services::{ServiceRegistry, ServiceView};

/// State injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceRegistry>,
    pub metrics: Option<PrometheusHandle>,
}

/// Build the Axum router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(report_handler))
        .route("/services", get(services_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "HTTP listener starting");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
        })
        .await?;

    tracing::info!("HTTP listener stopped");
    Ok(())
}

async fn report_handler(State(state): State<AppState>) -> String {
    build_report(&state.services)
}

async fn services_handler(State(state): State<AppState>) -> Json<Vec<ServiceView>> {
    Json(state.services.views())
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceSpec;
    use chrono::Utc;

    async fn start(state: AppState) -> (String, broadcast::Sender<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = broadcast::channel(1);
        tokio::spawn(serve(listener, state, rx));
        (format!("http://{}", addr), tx)
    }

    fn state() -> AppState {
        let services = Arc::new(ServiceRegistry::new(
            vec![ServiceSpec::new("a", "http://x"), ServiceSpec::new("b", "http://y")],
            6,
        ));
        services.get(0).unwrap().record_result(200, Utc::now());
        AppState { services, metrics: None }
    }

    #[tokio::test]
    async fn test_routes() {
        let (base, shutdown) = start(state()).await;
        let client = reqwest::Client::builder().no_proxy().build().unwrap();

        let res = client.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(res.status(), 200);

        let report = client.get(&base).send().await.unwrap().text().await.unwrap();
        assert!(report.contains("Total Services: 2"));
        assert!(report.contains("Total Healthy Services(200): 1"));

        let services: serde_json::Value = client
            .get(format!("{base}/services"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(services[0]["name"], "a");
        assert_eq!(services[0]["status"], 200);
        assert_eq!(services[0]["history"].as_array().unwrap().len(), 1);
        assert_eq!(services[1]["status"], 0);

        let res = client.get(format!("{base}/metrics")).send().await.unwrap();
        assert_eq!(res.status(), 404);

        let _ = shutdown.send(());
    }
}
