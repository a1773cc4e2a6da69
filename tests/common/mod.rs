//! Shared harness for the end-to-end API tests
//!
//! Builds a [`TestServer`] around the real router and hands back the
//! storage facade so tests can seed data directly.

#![allow(dead_code)]

use axum_test::TestServer;
use stayhub::api::AppState;
use stayhub::entities::{Amenity, City, Place, State, User};
use stayhub::server;
use stayhub::storage::{RelationshipMode, Storage};

pub fn test_server(mode: RelationshipMode) -> (TestServer, Storage) {
    let storage = Storage::new(mode);
    let app = server::build_router(AppState::new(storage.clone()));
    let server = TestServer::new(app);
    (server, storage)
}

/// One state, one city, one owner — the minimum to create places
pub struct Seed {
    pub state: State,
    pub city: City,
    pub user: User,
}

pub fn seed_geography(storage: &Storage) -> Seed {
    let state = State::new("Oregon".to_string());
    let city = City::new("Portland".to_string(), state.id);
    let user = User::new("owner@test.dev".to_string(), "hunter2".to_string());

    storage.states.add(state.clone());
    storage.cities.add(city.clone());
    storage.users.add(user.clone());

    Seed { state, city, user }
}

pub fn seed_place(storage: &Storage, seed: &Seed, name: &str) -> Place {
    let place = Place::new(seed.city.id, seed.user.id, name.to_string());
    storage.places.add(place.clone());
    place
}

pub fn seed_amenity(storage: &Storage, name: &str) -> Amenity {
    let amenity = Amenity::new(name.to_string());
    storage.amenities.add(amenity.clone());
    amenity
}
