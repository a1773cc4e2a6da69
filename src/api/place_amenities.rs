//! Place↔amenity link handlers
//!
//! Reads and mutations go through the storage facade helpers, which hide
//! the configured relationship mode from this layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::{Amenity, Place};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/places/{place_id}/amenities", get(list_place_amenities))
        .route(
            "/places/{place_id}/amenities/{amenity_id}",
            axum::routing::post(link_amenity).delete(unlink_amenity),
        )
}

async fn list_place_amenities(
    State(state): State<AppState>,
    Path(place_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Amenity>>> {
    let place = state
        .storage
        .places
        .get(&place_id)
        .ok_or_else(|| ApiError::not_found::<Place>(place_id))?;

    Ok(Json(state.storage.amenities_of_place(&place)))
}

async fn link_amenity(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<(StatusCode, Json<Amenity>)> {
    let place = state
        .storage
        .places
        .get(&place_id)
        .ok_or_else(|| ApiError::not_found::<Place>(place_id))?;
    let amenity = state
        .storage
        .amenities
        .get(&amenity_id)
        .ok_or_else(|| ApiError::not_found::<Amenity>(amenity_id))?;

    if !state.storage.attach_amenity(&place, amenity_id) {
        // already linked
        return Ok((StatusCode::OK, Json(amenity)));
    }
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(amenity)))
}

async fn unlink_amenity(
    State(state): State<AppState>,
    Path((place_id, amenity_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Value>> {
    let place = state
        .storage
        .places
        .get(&place_id)
        .ok_or_else(|| ApiError::not_found::<Place>(place_id))?;
    state
        .storage
        .amenities
        .get(&amenity_id)
        .ok_or_else(|| ApiError::not_found::<Amenity>(amenity_id))?;

    if !state.storage.detach_amenity(&place, amenity_id) {
        return Err(ApiError::not_found::<Amenity>(amenity_id));
    }
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}
