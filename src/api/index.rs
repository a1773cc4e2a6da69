//! Service status and entity counts

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use crate::api::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/stats", get(stats))
}

async fn status() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

async fn stats(State(state): State<AppState>) -> Json<Value> {
    let storage = &state.storage;
    Json(json!({
        "amenities": storage.amenities.count(),
        "cities": storage.cities.count(),
        "places": storage.places.count(),
        "states": storage.states.count(),
        "users": storage.users.count(),
    }))
}
