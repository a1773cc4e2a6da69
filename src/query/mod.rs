//! Place search resolution
//!
//! [`resolve`] turns a [`PlaceQuery`] into the set of matching places:
//!
//! 1. With no state or city criteria, every place is a candidate.
//!    Otherwise candidates are the union of the places of every city of
//!    every requested state, plus the places of every requested city,
//!    deduplicated by place id.
//! 2. With amenity criteria, a candidate survives only when its resolved
//!    amenity-id set contains *every* requested amenity.
//!
//! Unknown or malformed ids never fail a search; they simply match
//! nothing. The resolver only reads from the storage handle it is given
//! and guarantees no result ordering.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::entities::Place;
use crate::storage::Storage;

/// Search criteria for places, all sets optional
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    pub states: Vec<Uuid>,
    pub cities: Vec<Uuid>,
    pub amenities: Vec<Uuid>,
}

impl PlaceQuery {
    /// Build a query from raw id strings, silently dropping entries that
    /// are not valid uuids — the same lenient policy applied to unknown
    /// ids during resolution.
    pub fn from_raw(states: &[String], cities: &[String], amenities: &[String]) -> Self {
        fn parse(raw: &[String]) -> Vec<Uuid> {
            raw.iter()
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect()
        }

        Self {
            states: parse(states),
            cities: parse(cities),
            amenities: parse(amenities),
        }
    }
}

/// Resolve a place search against the storage facade.
///
/// Read-only and idempotent; an empty result is a normal value.
pub fn resolve(query: &PlaceQuery, storage: &Storage) -> Vec<Place> {
    let candidates: HashMap<Uuid, Place> = if query.states.is_empty() && query.cities.is_empty() {
        storage
            .places
            .list()
            .into_iter()
            .map(|place| (place.id, place))
            .collect()
    } else {
        let mut by_id = HashMap::new();
        for state_id in &query.states {
            for city in storage.cities_of_state(state_id) {
                for place in storage.places_of_city(&city.id) {
                    by_id.insert(place.id, place);
                }
            }
        }
        for city_id in &query.cities {
            for place in storage.places_of_city(city_id) {
                by_id.insert(place.id, place);
            }
        }
        by_id
    };

    if query.amenities.is_empty() {
        return candidates.into_values().collect();
    }

    let wanted: HashSet<Uuid> = query.amenities.iter().copied().collect();
    candidates
        .into_values()
        .filter(|place| wanted.is_subset(&storage.amenity_ids_of(place)))
        .collect()
}
