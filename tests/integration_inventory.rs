mod common;

use axum::http::StatusCode;
use common::{create_test_user, generate_unique_email, get_auth_token, json_request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;

async fn manager_token(pool: &PgPool) -> String {
    let email = generate_unique_email();
    create_test_user(pool, &email, "testpass123", "Manager").await;
    get_auth_token(setup_test_app(pool.clone()), &email, "testpass123").await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_category_fetch_by_id(pool: PgPool) {
    let manager = manager_token(&pool).await;

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "POST",
        "/api/inventory-categories",
        Some(&manager),
        Some(json!({ "name": "Feed" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = json_request(
        setup_test_app(pool.clone()),
        "GET",
        &format!("/api/inventory-categories/{}", id),
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Feed");

    let (status, _) = json_request(
        setup_test_app(pool),
        "GET",
        &format!("/api/inventory-categories/{}", uuid::Uuid::new_v4()),
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
