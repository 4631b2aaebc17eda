//! HTTP server implementation using Axum.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::core::store::KnowledgeStore;

/// Shared state for the web interface.
pub struct AppState {
    pub store: Mutex<KnowledgeStore>,
    /// Languages accepted by `POST /add`
    pub supported_languages: Vec<String>,
    /// Default number of answers for `POST /ask`
    pub top_k: usize,
    /// Rewritten after every successful add
    pub save_file: PathBuf,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(store: KnowledgeStore, config: &Config, save_file: PathBuf) -> Self {
        Self {
            store: Mutex::new(store),
            supported_languages: config.languages.supported.clone(),
            top_k: config.search.web_top_k,
            save_file,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(super::pages::index))
        .route("/about", get(super::pages::about))
        .route("/health", get(super::routes::health))
        .route("/ask", post(super::routes::ask))
        .route("/add", post(super::routes::add))
        .route("/stats", get(super::routes::stats))
        .route("/entries", get(super::routes::entries))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Bind `host:port`; `host` may be a name such as `localhost`.
pub async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let entries = state.store.lock().await.len();
    let save_file = state.save_file.clone();
    let app = build_router(state);

    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;

    info!(%addr, entries, save_file = %save_file.display(), "web interface listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("web interface stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(%e, "failed to listen for Ctrl-C");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_resolves_host_names() -> Result<()> {
        let listener = bind("localhost", 0).await?;
        assert!(listener.local_addr()?.ip().is_loopback());
        Ok(())
    }

    #[tokio::test]
    async fn test_bind_ip_address() -> Result<()> {
        let listener = bind("127.0.0.1", 0).await?;
        assert_ne!(listener.local_addr()?.port(), 0);
        Ok(())
    }
}
