//! Router assembly and the serve loop

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::storage::Storage;

/// Build the full application router with tracing and CORS layers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build storage from configuration, restoring a snapshot when one is set
pub fn build_storage(config: &AppConfig) -> Result<Storage> {
    match &config.storage.snapshot_path {
        Some(path) => Storage::with_snapshot(config.storage.relationship_mode, path.clone()),
        None => Ok(Storage::new(config.storage.relationship_mode)),
    }
}

/// Bind and serve until shutdown
pub async fn serve(config: AppConfig) -> Result<()> {
    let storage = build_storage(&config)?;
    let app = build_router(AppState::new(storage));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        addr = %addr,
        mode = ?config.storage.relationship_mode,
        "stayhub listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
