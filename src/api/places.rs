//! Place CRUD handlers and the search endpoint

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::{City, Place, User};
use crate::query::{self, PlaceQuery};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cities/{city_id}/places",
            get(list_places).post(create_place),
        )
        .route(
            "/places/{id}",
            get(get_place).put(update_place).delete(delete_place),
        )
        .route("/places_search", post(search_places))
}

async fn list_places(
    State(state): State<AppState>,
    Path(city_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Place>>> {
    state
        .storage
        .cities
        .get(&city_id)
        .ok_or_else(|| ApiError::not_found::<City>(city_id))?;

    Ok(Json(state.storage.places_of_city(&city_id)))
}

async fn get_place(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<Place>> {
    state
        .storage
        .places
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<Place>(id))
}

async fn create_place(
    State(state): State<AppState>,
    Path(city_id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Place>)> {
    state
        .storage
        .cities
        .get(&city_id)
        .ok_or_else(|| ApiError::not_found::<City>(city_id))?;

    let user_id = payload["user_id"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "user_id" })?;
    let name = payload["name"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "name" })?;

    let user_id = Uuid::parse_str(user_id).map_err(|_| ApiError::InvalidBody {
        message: format!("user_id '{user_id}' is not a valid uuid"),
    })?;
    state
        .storage
        .users
        .get(&user_id)
        .ok_or_else(|| ApiError::not_found::<User>(user_id))?;

    let mut place = Place::new(city_id, user_id, name.to_string());
    apply_place_fields(&mut place, &payload);

    state.storage.places.add(place.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(place)))
}

async fn update_place(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Place>> {
    let mut place = state
        .storage
        .places
        .get(&id)
        .ok_or_else(|| ApiError::not_found::<Place>(id))?;

    // id, user_id, city_id and the timestamps are immutable here;
    // apply_place_fields never touches them
    if let Some(name) = payload["name"].as_str() {
        place.name = name.to_string();
    }
    apply_place_fields(&mut place, &payload);
    place.touch();

    state.storage.places.update(place.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(place))
}

async fn delete_place(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state
        .storage
        .delete_place(&id)
        .ok_or_else(|| ApiError::not_found::<Place>(id))?;
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}

/// Optional descriptive fields shared by create and update
fn apply_place_fields(place: &mut Place, payload: &Value) {
    if let Some(description) = payload["description"].as_str() {
        place.description = description.to_string();
    }
    if let Some(number_rooms) = payload["number_rooms"].as_i64() {
        place.number_rooms = number_rooms as i32;
    }
    if let Some(number_bathrooms) = payload["number_bathrooms"].as_i64() {
        place.number_bathrooms = number_bathrooms as i32;
    }
    if let Some(max_guest) = payload["max_guest"].as_i64() {
        place.max_guest = max_guest as i32;
    }
    if let Some(price_by_night) = payload["price_by_night"].as_i64() {
        place.price_by_night = price_by_night as i32;
    }
    if let Some(latitude) = payload["latitude"].as_f64() {
        place.latitude = Some(latitude);
    }
    if let Some(longitude) = payload["longitude"].as_f64() {
        place.longitude = Some(longitude);
    }
}

/// Search criteria payload; absent arrays default to empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchRequest {
    states: Vec<String>,
    cities: Vec<String>,
    amenities: Vec<String>,
}

async fn search_places(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Json<Vec<Place>> {
    let query = PlaceQuery::from_raw(&body.states, &body.cities, &body.amenities);
    Json(query::resolve(&query, &state.storage))
}
