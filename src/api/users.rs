//! User CRUD handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::AppState;
use crate::core::error::{ApiError, ApiResult};
use crate::entities::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.storage.users.list())
}

async fn get_user(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Json<User>> {
    state
        .storage
        .users
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found::<User>(id))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let email = payload["email"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "email" })?;
    let password = payload["password"]
        .as_str()
        .ok_or(ApiError::MissingField { field: "password" })?;

    let mut user = User::new(email.to_string(), password.to_string());
    user.first_name = payload["first_name"].as_str().map(String::from);
    user.last_name = payload["last_name"].as_str().map(String::from);

    state.storage.users.add(user.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<User>> {
    let mut user = state
        .storage
        .users
        .get(&id)
        .ok_or_else(|| ApiError::not_found::<User>(id))?;

    // email is immutable once created
    if let Some(password) = payload["password"].as_str() {
        user.password = password.to_string();
    }
    if let Some(first_name) = payload["first_name"].as_str() {
        user.first_name = Some(first_name.to_string());
    }
    if let Some(last_name) = payload["last_name"].as_str() {
        user.last_name = Some(last_name.to_string());
    }
    user.touch();
    state.storage.users.update(user.clone());
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    state
        .storage
        .users
        .delete(&id)
        .ok_or_else(|| ApiError::not_found::<User>(id))?;
    state.storage.save().map_err(ApiError::storage)?;

    Ok(Json(json!({})))
}
