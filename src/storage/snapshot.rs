//! JSON file snapshots of the full storage contents

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Amenity, City, Place, State, User};
use crate::storage::Storage;

/// A place↔amenity membership row as persisted in a snapshot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmenityLinkRow {
    pub place_id: Uuid,
    pub amenity_id: Uuid,
}

/// Serializable image of every collection in [`Storage`]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub place_amenities: Vec<AmenityLinkRow>,
}

impl Snapshot {
    /// Capture the current contents of the storage facade
    pub fn capture(storage: &Storage) -> Self {
        Self {
            states: storage.states.list(),
            cities: storage.cities.list(),
            users: storage.users.list(),
            amenities: storage.amenities.list(),
            places: storage.places.list(),
            place_amenities: storage
                .place_amenities
                .rows()
                .into_iter()
                .map(|(place_id, amenity_id)| AmenityLinkRow {
                    place_id,
                    amenity_id,
                })
                .collect(),
        }
    }

    /// Load every collection into the storage facade, replacing contents
    pub fn apply(self, storage: &Storage) {
        storage.states.replace_all(self.states);
        storage.cities.replace_all(self.cities);
        storage.users.replace_all(self.users);
        storage.amenities.replace_all(self.amenities);
        storage.places.replace_all(self.places);
        storage.place_amenities.restore(
            self.place_amenities
                .into_iter()
                .map(|row| (row.place_id, row.amenity_id))
                .collect(),
        );
    }

    /// Read a snapshot file. A missing file is `Ok(None)`, an unreadable or
    /// malformed one is an error.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot '{}'", path.display()))?;
        let snapshot = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse snapshot '{}'", path.display()))?;
        Ok(Some(snapshot))
    }

    /// Write the snapshot to disk as pretty JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write snapshot '{}'", path.display()))?;
        Ok(())
    }
}
