//! Amenity CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::Amenity;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/amenities", get(list_amenities).post(create_amenity))
        .route(
            "/amenities/{id}",
            get(get_amenity).put(update_amenity).delete(delete_amenity),
        )
}

async fn list_amenities(State(state): State<AppState>) -> Json<Vec<Amenity>> {
    Json(state.storage.amenities.list())
}

async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Amenity>> {
    state
        .storage
        .amenities
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Amenity>(id))
}

async fn create_amenity(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Amenity>)> {
    let name = payload["name"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "name" })?;

    let amenity = Amenity::new(name.to_string());
    state.storage.amenities.add(amenity.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(amenity)))
}

async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Amenity>> {
    let mut amenity = state
        .storage
        .amenities
        .get(&id)
        .ok_or_else(|| ApiError::not_found::<Amenity>(id))?;

    if let Some(name) = payload["name"].as_str() {
        amenity.name = name.to_string();
    }
    amenity.touch();
    state.storage.amenities.update(amenity.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(amenity))
}

async fn delete_amenity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state
        .storage
        .amenities
        .delete(&id)
        .ok_or_else(|| ApiError::not_found::<Amenity>(id))?;
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}
