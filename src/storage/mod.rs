//! Storage facade aggregating the per-entity stores
//!
//! One [`Storage`] value holds every collection, the place↔amenity link
//! store, and the configured [`RelationshipMode`]. Cloning shares the
//! underlying maps, so the same value serves as axum state and as the
//! explicit handle passed to the query resolver.

pub mod entity_store;
pub mod links;
pub mod snapshot;

use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::entities::{Amenity, City, Place, State, User};

pub use entity_store::EntityStore;
pub use links::AmenityLinkStore;
pub use snapshot::Snapshot;

/// How place↔amenity memberships are represented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipMode {
    /// The place record carries its amenity id list
    #[default]
    Embedded,
    /// Memberships live in the [`AmenityLinkStore`]
    Joined,
}

impl FromStr for RelationshipMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "embedded" => Ok(RelationshipMode::Embedded),
            "joined" => Ok(RelationshipMode::Joined),
            other => Err(anyhow::anyhow!(
                "unknown relationship mode '{other}', expected 'embedded' or 'joined'"
            )),
        }
    }
}

/// The storage facade
#[derive(Clone)]
pub struct Storage {
    mode: RelationshipMode,
    snapshot_path: Option<PathBuf>,
    pub states: EntityStore<State>,
    pub cities: EntityStore<City>,
    pub users: EntityStore<User>,
    pub amenities: EntityStore<Amenity>,
    pub places: EntityStore<Place>,
    pub place_amenities: AmenityLinkStore,
}

impl Storage {
    /// Purely in-memory storage; [`Storage::save`] is a no-op
    pub fn new(mode: RelationshipMode) -> Self {
        Self {
            mode,
            snapshot_path: None,
            states: EntityStore::new(),
            cities: EntityStore::new(),
            users: EntityStore::new(),
            amenities: EntityStore::new(),
            places: EntityStore::new(),
            place_amenities: AmenityLinkStore::new(),
        }
    }

    /// File-backed storage, restoring the snapshot when it exists
    pub fn with_snapshot(mode: RelationshipMode, path: PathBuf) -> Result<Self> {
        let mut storage = Self::new(mode);
        storage.snapshot_path = Some(path.clone());
        if let Some(snapshot) = Snapshot::read(&path)? {
            snapshot.apply(&storage);
            info!(
                path = %path.display(),
                places = storage.places.count(),
                "restored storage snapshot"
            );
        }
        Ok(storage)
    }

    pub fn mode(&self) -> RelationshipMode {
        self.mode
    }

    /// Persist everything to the snapshot file, if one is configured
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.snapshot_path {
            Snapshot::capture(self).write(path)?;
        }
        Ok(())
    }

    // === Relationship lookups ===

    /// Cities belonging to a state; empty for an unknown state id
    pub fn cities_of_state(&self, state_id: &Uuid) -> Vec<City> {
        self.cities
            .list()
            .into_iter()
            .filter(|city| city.state_id == *state_id)
            .collect()
    }

    /// Places belonging to a city; empty for an unknown city id
    pub fn places_of_city(&self, city_id: &Uuid) -> Vec<Place> {
        self.places
            .list()
            .into_iter()
            .filter(|place| place.city_id == *city_id)
            .collect()
    }

    /// Normalize a place's amenity memberships to an id set, honoring the
    /// configured relationship mode
    pub fn amenity_ids_of(&self, place: &Place) -> HashSet<Uuid> {
        match self.mode {
            RelationshipMode::Embedded => place.amenity_ids.iter().copied().collect(),
            RelationshipMode::Joined => self.place_amenities.amenities_of(place.id),
        }
    }

    /// Resolve a place's amenities to full records, skipping ids with no
    /// corresponding amenity
    pub fn amenities_of_place(&self, place: &Place) -> Vec<Amenity> {
        self.amenity_ids_of(place)
            .iter()
            .filter_map(|id| self.amenities.get(id))
            .collect()
    }

    // === Relationship mutations ===

    /// Link an amenity to a place. Returns false when already linked.
    pub fn attach_amenity(&self, place: &Place, amenity_id: Uuid) -> bool {
        match self.mode {
            RelationshipMode::Joined => self.place_amenities.link(place.id, amenity_id),
            RelationshipMode::Embedded => {
                let Some(mut place) = self.places.get(&place.id) else {
                    return false;
                };
                if place.amenity_ids.contains(&amenity_id) {
                    return false;
                }
                place.amenity_ids.push(amenity_id);
                place.touch();
                self.places.update(place);
                true
            }
        }
    }

    /// Unlink an amenity from a place. Returns false when not linked.
    pub fn detach_amenity(&self, place: &Place, amenity_id: Uuid) -> bool {
        match self.mode {
            RelationshipMode::Joined => self.place_amenities.unlink(place.id, amenity_id),
            RelationshipMode::Embedded => {
                let Some(mut place) = self.places.get(&place.id) else {
                    return false;
                };
                let before = place.amenity_ids.len();
                place.amenity_ids.retain(|id| *id != amenity_id);
                if place.amenity_ids.len() == before {
                    return false;
                }
                place.touch();
                self.places.update(place);
                true
            }
        }
    }

    /// Delete a place together with its joined-mode amenity links
    pub fn delete_place(&self, id: &Uuid) -> Option<Place> {
        let removed = self.places.delete(id);
        if removed.is_some() {
            self.place_amenities.clear_place(*id);
        }
        removed
    }
}
