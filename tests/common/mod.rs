use axum::body::Body;
use axum::http::{Request, StatusCode};
use herdbook::config::cors::CorsConfig;
use herdbook::config::jwt::JwtConfig;
use herdbook::router::init_router;
use herdbook::state::AppState;
use herdbook::utils::password::hash_password;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Insert a user directly, bypassing the registration endpoint so tests can
/// seed roles the API refuses to hand out.
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, role: &str) -> Uuid {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test User")
    .bind(email)
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

/// Fire a JSON request and return status plus parsed body.
pub async fn json_request(
    app: axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@farm.test", Uuid::new_v4())
}
