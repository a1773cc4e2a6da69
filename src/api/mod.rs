//! HTTP handlers for all API routes
//!
//! Every module contributes a `routes()` sub-router; [`routes`] merges
//! them into the `/api/v1` surface. Handlers follow one shape: fetch by
//! id or 404, extract payload fields, mutate the record, persist via
//! [`Storage::save`], serialize.

pub mod amenities;
pub mod cities;
pub mod index;
pub mod place_amenities;
pub mod places;
pub mod states;
pub mod users;

use axum::Router;

use crate::storage::Storage;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}

/// All API routes, unprefixed; the server nests this under `/api/v1`
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(index::routes())
        .merge(states::routes())
        .merge(cities::routes())
        .merge(amenities::routes())
        .merge(users::routes())
        .merge(places::routes())
        .merge(place_amenities::routes())
}
