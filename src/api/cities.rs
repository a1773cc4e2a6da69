//! City CRUD handlers, nested under their owning state for listing and
//! creation

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::{self, City};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/states/{state_id}/cities",
            get(list_cities).post(create_city),
        )
        .route(
            "/cities/{id}",
            get(get_city).put(update_city).delete(delete_city),
        )
}

async fn list_cities(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
) -> ApiResult<Json<Vec<City>>> {
    state
        .storage
        .states
        .get(&state_id)
        .ok_or_else(|| ApiError::not_found::<entities::State>(state_id))?;

    Ok(Json(state.storage.cities_of_state(&state_id)))
}

async fn get_city(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<City>> {
    state
        .storage
        .cities
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<City>(id))
}

async fn create_city(
    State(state): State<AppState>,
    Path(state_id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<City>)> {
    state
        .storage
        .states
        .get(&state_id)
        .ok_or_else(|| ApiError::not_found::<entities::State>(state_id))?;

    let name = payload["name"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "name" })?;

    let city = City::new(name.to_string(), state_id);
    state.storage.cities.add(city.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(city)))
}

async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<City>> {
    let mut city = state
        .storage
        .cities
        .get(&id)
        .ok_or_else(|| ApiError::not_found::<City>(id))?;

    if let Some(name) = payload["name"].as_str() {
        city.name = name.to_string();
    }
    city.touch();
    state.storage.cities.update(city.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(city))
}

async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state
        .storage
        .cities
        .delete(&id)
        .ok_or_else(|| ApiError::not_found::<City>(id))?;
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}
