//! The five domain models exposed by the API
//!
//! Plain serde records with uuid identifiers and chrono timestamps.
//! Relationships are held as foreign-key ids on the owning side
//! (`City::state_id`, `Place::city_id`, `Place::user_id`); reverse lookups
//! go through [`crate::storage::Storage`].

pub mod amenity;
pub mod city;
pub mod place;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use city::City;
pub use place::Place;
pub use state::State;
pub use user::User;
