//! # cadence-server Entry Point
//!
//! Binds the API router over in-memory stores. Configuration comes
//! from the environment: `CADENCE_ADDR` for the bind address and
//! `RUST_LOG` for log filtering.

use std::sync::Arc;

use anyhow::Context;

use cadence_api::{app, AppState};
use cadence_assign::InMemoryDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    metrics_exporter_prometheus::PrometheusBuilder::new()
        .install()
        .context("install prometheus exporter")?;

    let addr = std::env::var("CADENCE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let state = AppState::in_memory(Arc::new(InMemoryDirectory::new()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "cadence-server listening");
    axum::serve(listener, app(state)).await.context("serve")?;
    Ok(())
}
