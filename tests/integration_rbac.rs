//! End-to-end checks of the role policy across representative routes:
//! in-handler gating (animals, weight records) and whole-router gating
//! (locations).

mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, get_auth_token, json_request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

async fn token_for(pool: &PgPool, role: &str) -> String {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(pool, &email, password, role).await;
    get_auth_token(setup_test_app(pool.clone()), &email, password).await
}

fn animal_payload(tag: &str) -> serde_json::Value {
    json!({
        "tag": tag,
        "species": "cattle",
        "sex": "female"
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_animal_creation_follows_role_policy(pool: PgPool) {
    let manager = token_for(&pool, "Manager").await;
    let attendant = token_for(&pool, "Attendant").await;

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/animals",
        Some(&manager),
        Some(animal_payload("C-100")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["tag"], "C-100");
    assert_eq!(body["status"], "active");

    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/animals",
        Some(&attendant),
        Some(animal_payload("C-101")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Attendant can still read the registry
    let (status, body) = json_request(
        setup_test_app(pool),
        "GET",
        "/api/animals",
        Some(&attendant),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_animal_deletion_is_superadmin_only(pool: PgPool) {
    let superadmin = token_for(&pool, "SuperAdmin").await;
    let manager = token_for(&pool, "Manager").await;

    let (_, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/animals",
        Some(&manager),
        Some(animal_payload("C-200")),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "DELETE",
        &format!("/api/animals/{}", id),
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = json_request(
        setup_test_app(pool),
        "DELETE",
        &format!("/api/animals/{}", id),
        Some(&superadmin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Animal deleted");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_attendant_records_weight(pool: PgPool) {
    let manager = token_for(&pool, "Manager").await;
    let attendant = token_for(&pool, "Attendant").await;

    let (_, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/animals",
        Some(&manager),
        Some(animal_payload("C-300")),
    )
    .await;
    let animal_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/weight-records",
        Some(&attendant),
        Some(json!({
            "animal_id": animal_id,
            "weight": 412.5,
            "recorded_on": "2024-03-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["weight"], 412.5);

    // Correcting a record is a management action
    let record_id = body["id"].as_str().unwrap().to_string();
    let (status, _) = json_request(
        setup_test_app(pool),
        "PUT",
        &format!("/api/weight-records/{}", record_id),
        Some(&attendant),
        Some(json!({ "weight": 410.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_locations_router_is_gated_as_a_whole(pool: PgPool) {
    let superadmin = token_for(&pool, "SuperAdmin").await;
    let manager = token_for(&pool, "Manager").await;
    let attendant = token_for(&pool, "Attendant").await;

    // Attendant cannot even list locations
    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "GET",
        "/api/locations",
        Some(&attendant),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Missing credential is 401, not 403
    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "GET",
        "/api/locations",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/locations",
        Some(&manager),
        Some(json!({ "name": "North paddock", "capacity": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    // Deletion tightens to SuperAdmin inside the handler
    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "DELETE",
        &format!("/api/locations/{}", id),
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = json_request(
        setup_test_app(pool),
        "DELETE",
        &format!("/api/locations/{}", id),
        Some(&superadmin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Location deleted");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inventory_router_is_gated_as_a_whole(pool: PgPool) {
    let manager = token_for(&pool, "Manager").await;
    let attendant = token_for(&pool, "Attendant").await;

    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "GET",
        "/api/inventory",
        Some(&attendant),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/inventory",
        Some(&manager),
        Some(json!({ "name": "Pellets", "quantity": 12.0, "unit": "bags" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["quantity"], 12.0);
}
