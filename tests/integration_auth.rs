mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, json_request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_register_then_login(pool: PgPool) {
    let email = generate_unique_email();

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Amina Yusuf",
            "email": email,
            "password": "password123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["role"], "Attendant");
    // Password hash never leaves the API
    assert!(body.get("password").is_none());

    let (status, body) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
    assert_eq!(body["user"]["email"], email.as_str());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    let email = generate_unique_email();
    let payload = json!({
        "name": "Amina Yusuf",
        "email": email,
        "password": "password123"
    });

    let (status, _) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/auth/register",
        None,
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/register",
        None,
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_blank_name_rejected(pool: PgPool) {
    let (status, _) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "   ",
            "email": generate_unique_email(),
            "password": "password123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_superadmin_via_api_forbidden(pool: PgPool) {
    let (status, _) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Sneaky",
            "email": generate_unique_email(),
            "password": "password123",
            "role": "SuperAdmin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_wrong_password_unauthorized(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "password123", "Attendant").await;

    let (status, _) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_unknown_email_unauthorized(pool: PgPool) {
    let (status, _) = json_request(
        setup_test_app(pool),
        "POST",
        "/api/auth/login",
        None,
        Some(json!({
            "email": "nobody@farm.test",
            "password": "password123"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health_endpoint_is_open(pool: PgPool) {
    let (status, body) = json_request(setup_test_app(pool), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unlisted_method_is_405_json(pool: PgPool) {
    // /api/auth/register only accepts POST
    let (status, body) = json_request(
        setup_test_app(pool),
        "DELETE",
        "/api/auth/register",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body["error"].is_string());
}
