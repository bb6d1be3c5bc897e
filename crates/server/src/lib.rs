//! Metrics exposition service.
//!
//! Serves the engine's counter snapshot as JSON at `GET /metrics` for
//! external polling. The engine itself never depends on this crate; it
//! only exposes a thread-safe snapshot read, and this service is one
//! possible caller of it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use eyre::WrapErr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use treediff_engine::Metrics;
use treediff_primitives::MetricsSnapshot;

#[derive(Copy, Clone, Debug)]
pub struct ServerConfig {
    pub listen: SocketAddr,
}

/// Serve `GET /metrics` until the token is cancelled.
pub async fn start(
    config: ServerConfig,
    metrics: Arc<Metrics>,
    cancellation_token: CancellationToken,
) -> eyre::Result<()> {
    let listener = TcpListener::bind(config.listen)
        .await
        .wrap_err_with(|| format!("failed to bind metrics listener on {}", config.listen))?;
    info!("metrics server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(metrics))
        .with_graceful_shutdown(async move {
            cancellation_token.cancelled().await;
            info!("graceful metrics server shutdown initiated");
        })
        .await
        .wrap_err("metrics server terminated abnormally")?;

    Ok(())
}

fn router(metrics: Arc<Metrics>) -> Router {
    Router::new()
        .route("/metrics", get(handle_metrics))
        .with_state(metrics)
}

async fn handle_metrics(State(metrics): State<Arc<Metrics>>) -> Json<MetricsSnapshot> {
    Json(metrics.snapshot())
}
