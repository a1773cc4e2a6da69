//! Joined-mode place↔amenity membership store

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

/// Membership rows for the joined relationship mode, keyed by place id.
///
/// In embedded mode this store stays empty; the place record itself holds
/// the amenity id list.
#[derive(Clone, Default)]
pub struct AmenityLinkStore {
    links: Arc<RwLock<HashMap<Uuid, HashSet<Uuid>>>>,
}

impl AmenityLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link an amenity to a place. Returns false when already linked.
    pub fn link(&self, place_id: Uuid, amenity_id: Uuid) -> bool {
        self.links
            .write()
            .unwrap()
            .entry(place_id)
            .or_default()
            .insert(amenity_id)
    }

    /// Remove a link. Returns false when the pair was not linked.
    pub fn unlink(&self, place_id: Uuid, amenity_id: Uuid) -> bool {
        let mut links = self.links.write().unwrap();
        match links.get_mut(&place_id) {
            Some(set) => {
                let removed = set.remove(&amenity_id);
                if set.is_empty() {
                    links.remove(&place_id);
                }
                removed
            }
            None => false,
        }
    }

    pub fn is_linked(&self, place_id: Uuid, amenity_id: Uuid) -> bool {
        self.links
            .read()
            .unwrap()
            .get(&place_id)
            .is_some_and(|set| set.contains(&amenity_id))
    }

    /// All amenity ids linked to a place
    pub fn amenities_of(&self, place_id: Uuid) -> HashSet<Uuid> {
        self.links
            .read()
            .unwrap()
            .get(&place_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop every link of a place, used when the place is deleted
    pub fn clear_place(&self, place_id: Uuid) {
        self.links.write().unwrap().remove(&place_id);
    }

    /// Flatten to (place_id, amenity_id) rows for snapshotting
    pub fn rows(&self) -> Vec<(Uuid, Uuid)> {
        self.links
            .read()
            .unwrap()
            .iter()
            .flat_map(|(place_id, amenities)| {
                amenities.iter().map(move |amenity_id| (*place_id, *amenity_id))
            })
            .collect()
    }

    /// Replace all links from snapshot rows
    pub fn restore(&self, rows: Vec<(Uuid, Uuid)>) {
        let mut links = self.links.write().unwrap();
        links.clear();
        for (place_id, amenity_id) in rows {
            links.entry(place_id).or_default().insert(amenity_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_idempotent() {
        let store = AmenityLinkStore::new();
        let place = Uuid::new_v4();
        let wifi = Uuid::new_v4();

        assert!(store.link(place, wifi));
        assert!(!store.link(place, wifi));
        assert!(store.is_linked(place, wifi));
    }

    #[test]
    fn test_unlink() {
        let store = AmenityLinkStore::new();
        let place = Uuid::new_v4();
        let wifi = Uuid::new_v4();

        store.link(place, wifi);
        assert!(store.unlink(place, wifi));
        assert!(!store.unlink(place, wifi));
        assert!(!store.is_linked(place, wifi));
        assert!(store.amenities_of(place).is_empty());
    }

    #[test]
    fn test_amenities_of() {
        let store = AmenityLinkStore::new();
        let place = Uuid::new_v4();
        let wifi = Uuid::new_v4();
        let pool = Uuid::new_v4();

        store.link(place, wifi);
        store.link(place, pool);

        let set = store.amenities_of(place);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&wifi) && set.contains(&pool));
        assert!(store.amenities_of(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_clear_place() {
        let store = AmenityLinkStore::new();
        let place = Uuid::new_v4();
        store.link(place, Uuid::new_v4());
        store.link(place, Uuid::new_v4());

        store.clear_place(place);
        assert!(store.amenities_of(place).is_empty());
    }

    #[test]
    fn test_rows_restore_round_trip() {
        let store = AmenityLinkStore::new();
        let place = Uuid::new_v4();
        let wifi = Uuid::new_v4();
        store.link(place, wifi);

        let rows = store.rows();
        assert_eq!(rows, vec![(place, wifi)]);

        let other = AmenityLinkStore::new();
        other.restore(rows);
        assert!(other.is_linked(place, wifi));
    }
}
