//! End-to-end tests for place CRUD and place↔amenity links

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};
use stayhub::storage::RelationshipMode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_place_happy_path() {
    let (server, storage) = test_server(RelationshipMode::Embedded);
    let seed = seed_geography(&storage);

    let response = server
        .post(&format!("/api/v1/cities/{}/places", seed.city.id))
        .json(&json!({
            "user_id": seed.user.id,
            "name": "Riverside loft",
            "description": "Bright and quiet",
            "number_rooms": 2,
            "price_by_night": 120,
            "latitude": 45.52,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["name"], "Riverside loft");
    assert_eq!(created["city_id"].as_str().unwrap(), seed.city.id.to_string());
    assert_eq!(created["user_id"].as_str().unwrap(), seed.user.id.to_string());
    assert_eq!(created["number_rooms"], 2);
    assert_eq!(created["price_by_night"], 120);
    assert_eq!(created["latitude"], 45.52);
    assert_eq!(created["amenity_ids"], json!([]));
}

#[tokio::test]
async fn test_create_place_validation() {
    let (server, storage) = test_server(RelationshipMode::Embedded);
    let seed = seed_geography(&storage);

    // Unknown city
    let response = server
        .post(&format!("/api/v1/cities/{}/places", Uuid::new_v4()))
        .json(&json!({ "user_id": seed.user.id, "name": "x" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Missing user_id
    let response = server
        .post(&format!("/api/v1/cities/{}/places", seed.city.id))
        .json(&json!({ "name": "x" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing user_id");

    // Missing name
    let response = server
        .post(&format!("/api/v1/cities/{}/places", seed.city.id))
        .json(&json!({ "user_id": seed.user.id }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Missing name");

    // Unknown user
    let response = server
        .post(&format!("/api/v1/cities/{}/places", seed.city.id))
        .json(&json!({ "user_id": Uuid::new_v4(), "name": "x" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_places_of_city() {
    let (server, storage) = test_server(RelationshipMode::Embedded);
    let seed = seed_geography(&storage);
    seed_place(&storage, &seed, "P1");
    seed_place(&storage, &seed, "P2");

    let response = server
        .get(&format!("/api/v1/cities/{}/places", seed.city.id))
        .await;
    response.assert_status_ok();

    let listed: Value = response.json();
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let response = server
        .get(&format!("/api/v1/cities/{}/places", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_place_ignores_immutable_fields() {
    let (server, storage) = test_server(RelationshipMode::Embedded);
    let seed = seed_geography(&storage);
    let place = seed_place(&storage, &seed, "Old name");

    let response = server
        .put(&format!("/api/v1/places/{}", place.id))
        .json(&json!({
            "name": "New name",
            "max_guest": 4,
            "id": Uuid::new_v4(),
            "user_id": Uuid::new_v4(),
            "city_id": Uuid::new_v4(),
        }))
        .await;
    response.assert_status_ok();

    let updated: Value = response.json();
    assert_eq!(updated["name"], "New name");
    assert_eq!(updated["max_guest"], 4);
    assert_eq!(updated["id"].as_str().unwrap(), place.id.to_string());
    assert_eq!(updated["user_id"].as_str().unwrap(), seed.user.id.to_string());
    assert_eq!(updated["city_id"].as_str().unwrap(), seed.city.id.to_string());
}

#[tokio::test]
async fn test_delete_place() {
    let (server, storage) = test_server(RelationshipMode::Joined);
    let seed = seed_geography(&storage);
    let place = seed_place(&storage, &seed, "Loft");
    let wifi = seed_amenity(&storage, "wifi");
    storage.attach_amenity(&place, wifi.id);

    let response = server.delete(&format!("/api/v1/places/{}", place.id)).await;
    response.assert_status_ok();

    assert!(storage.places.get(&place.id).is_none());
    assert!(storage.place_amenities.amenities_of(place.id).is_empty());

    let response = server.delete(&format!("/api/v1/places/{}", place.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_link_and_unlink_amenity_embedded_mode() {
    link_and_unlink_amenity(RelationshipMode::Embedded).await;
}

#[tokio::test]
async fn test_link_and_unlink_amenity_joined_mode() {
    link_and_unlink_amenity(RelationshipMode::Joined).await;
}

async fn link_and_unlink_amenity(mode: RelationshipMode) {
    let (server, storage) = test_server(mode);
    let seed = seed_geography(&storage);
    let place = seed_place(&storage, &seed, "Loft");
    let wifi = seed_amenity(&storage, "wifi");

    let url = format!("/api/v1/places/{}/amenities/{}", place.id, wifi.id);

    // First link created
    let response = server.post(&url).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "wifi");

    // Linking again is a 200, not a duplicate
    let response = server.post(&url).await;
    response.assert_status_ok();

    // The amenity shows up in the place's amenity list
    let response = server
        .get(&format!("/api/v1/places/{}/amenities", place.id))
        .await;
    response.assert_status_ok();
    let listed: Value = response.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "wifi");

    // Unlink, then unlinking again is 404
    let response = server.delete(&url).await;
    response.assert_status_ok();

    let response = server.delete(&url).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .get(&format!("/api/v1/places/{}/amenities", place.id))
        .await;
    let listed: Value = response.json();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_link_amenity_unknown_parts_404() {
    let (server, storage) = test_server(RelationshipMode::Embedded);
    let seed = seed_geography(&storage);
    let place = seed_place(&storage, &seed, "Loft");
    let wifi = seed_amenity(&storage, "wifi");

    let response = server
        .post(&format!(
            "/api/v1/places/{}/amenities/{}",
            Uuid::new_v4(),
            wifi.id
        ))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .post(&format!(
            "/api/v1/places/{}/amenities/{}",
            place.id,
            Uuid::new_v4()
        ))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
