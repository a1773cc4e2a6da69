//! Entity trait defining the core abstraction shared by all models

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all entities in the system.
///
/// All entities carry:
/// - id: Unique identifier
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
///
/// The resource names feed both the URL layout and error messages.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "places", "cities")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "place", "city")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;
}

/// Implements [`Entity`] for a model struct with the conventional
/// `id` / `created_at` / `updated_at` fields.
#[macro_export]
macro_rules! impl_entity {
    ($ty:ty, $singular:literal, $plural:literal) => {
        impl $crate::core::entity::Entity for $ty {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> uuid::Uuid {
                self.id
            }

            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.updated_at
            }
        }
    };
}
