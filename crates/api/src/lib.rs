//! HTTP layer over the disk catalog, built on axum.

mod config;
mod error;
mod handlers;

use anyhow::{bail, Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use discos_core::DiskCatalog;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ServerConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_BIND};
pub use error::{
    ApiError, ErrorResponse, DISK_NOT_FOUND_MESSAGE, INVALID_PATH_MESSAGE, ROUTE_NOT_FOUND_MESSAGE,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<DiskCatalog>,
}

impl AppState {
    pub fn new(catalog: DiskCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Builds the API router with CORS restricted to `allowed_origin`.
pub fn router(state: AppState, allowed_origin: &str) -> Result<Router> {
    let cors = cors_layer(allowed_origin)?;
    Ok(Router::new()
        .route("/api/discos", get(handlers::list_disks))
        .route(
            "/api/discos/{letter}/particiones",
            get(handlers::list_partitions),
        )
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    // Credentialed CORS cannot be combined with a wildcard origin.
    if allowed_origin.trim() == "*" {
        bail!("allowed origin must be a single origin, not \"*\"");
    }
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("invalid allowed origin {allowed_origin:?}"))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Binds `config.bind` and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, catalog: DiskCatalog) -> Result<()> {
    let disks = catalog.len();
    let app = router(AppState::new(catalog), &config.allowed_origin)?;
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        origin = %config.allowed_origin,
        disks,
        "server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "ctrl-c handler failed");
        std::future::pending::<()>().await;
    }
}
