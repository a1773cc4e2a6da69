//! Core module containing the entity trait and the API error type

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{ApiError, ApiResult};
