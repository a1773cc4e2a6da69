//! # stayhub
//!
//! A REST API for lodging listings built on axum.
//!
//! Five related entities — [`Place`](entities::Place), [`City`](entities::City),
//! [`State`](entities::State), [`Amenity`](entities::Amenity) and
//! [`User`](entities::User) — exposed through plain CRUD routes under
//! `/api/v1`, backed by an in-memory [`Storage`](storage::Storage) facade
//! with optional JSON file snapshots.
//!
//! A place's amenity memberships are stored in one of two modes selected at
//! configuration time:
//!
//! - **embedded**: the place record carries its amenity id list directly;
//! - **joined**: memberships live in a separate link store and the embedded
//!   list is ignored.
//!
//! The one endpoint with real logic is `POST /api/v1/places_search`, served
//! by [`query::resolve`]: it unions places reachable from the requested
//! states and cities, then keeps those holding every requested amenity.
//! Both relationship modes are normalized to amenity-id sets before
//! matching, so the resolver is mode-agnostic.

pub mod api;
pub mod config;
pub mod core;
pub mod entities;
pub mod query;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::api::AppState;
    pub use crate::config::AppConfig;
    pub use crate::core::entity::Entity;
    pub use crate::core::error::{ApiError, ApiResult};
    pub use crate::entities::{Amenity, City, Place, State, User};
    pub use crate::query::PlaceQuery;
    pub use crate::storage::{RelationshipMode, Storage};
}
