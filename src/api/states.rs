//! State CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(list_states).post(create_state))
        .route(
            "/states/{id}",
            get(get_state).put(update_state).delete(delete_state),
        )
}

async fn list_states(State(state): State<AppState>) -> Json<Vec<entities::State>> {
    Json(state.storage.states.list())
}

async fn get_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<entities::State>> {
    state
        .storage
        .states
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<entities::State>(id))
}

async fn create_state(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<entities::State>)> {
    let name = payload["name"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "name" })?;

    let record = entities::State::new(name.to_string());
    state.storage.states.add(record.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<entities::State>> {
    let mut record = state
        .storage
        .states
        .get(&id)
        .ok_or_else(|| ApiError::not_found::<entities::State>(id))?;

    if let Some(name) = payload["name"].as_str() {
        record.name = name.to_string();
    }
    record.touch();
    state.storage.states.update(record.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(record))
}

async fn delete_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state
        .storage
        .states
        .delete(&id)
        .ok_or_else(|| ApiError::not_found::<entities::State>(id))?;
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}
