//! Router-level exercises of the auth and role middleware. These never touch
//! the database: the pool is lazy and the probe handler is the only thing
//! behind the layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::routing::get;
use axum::Router;
use herdbook::config::cors::CorsConfig;
use herdbook::config::jwt::JwtConfig;
use herdbook::middleware::role::require_roles;
use herdbook::modules::auth::model::UserRole;
use herdbook::state::AppState;
use herdbook::utils::jwt::create_access_token;
use tower::ServiceExt;
use uuid::Uuid;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret".to_string(),
        access_token_expiry: 3600,
    }
}

fn test_state() -> AppState {
    let db = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/unused")
        .unwrap();
    AppState {
        db,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::default(),
    }
}

fn token_for_role(role: &str) -> String {
    create_access_token(
        Uuid::new_v4(),
        "Test User",
        "test@farm.test",
        role,
        &test_jwt_config(),
    )
    .unwrap()
}

fn probe_app(allowed_roles: Vec<UserRole>, hits: Arc<AtomicUsize>) -> Router {
    let state = test_state();
    Router::new()
        .route(
            "/probe",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "ok"
                }
            }),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            move |state: State<AppState>, req: Request, next: Next| {
                let allowed_roles = allowed_roles.clone();
                async move { require_roles(state, req, next, allowed_roles).await }
            },
        ))
        .with_state(state)
}

async fn probe(app: Router, token: Option<&str>) -> StatusCode {
    let mut builder = Request::builder().method("GET").uri("/probe");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
    response.status()
}

#[tokio::test]
async fn test_missing_credential_is_401_and_handler_never_runs() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(vec![UserRole::SuperAdmin], hits.clone());

    let status = probe(app, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_garbage_token_is_401_not_403() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(vec![UserRole::SuperAdmin], hits.clone());

    let status = probe(app, Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_role_is_403_and_handler_never_runs() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(vec![UserRole::SuperAdmin], hits.clone());

    let status = probe(app, Some(&token_for_role("Attendant"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_allowed_role_reaches_handler() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(
        vec![UserRole::SuperAdmin, UserRole::Manager],
        hits.clone(),
    );

    let status = probe(app, Some(&token_for_role("Manager"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_empty_allow_list_admits_any_authenticated_role() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(vec![], hits.clone());

    let status = probe(app, Some(&token_for_role("Attendant"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_401() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = probe_app(vec![], hits.clone());

    let other_config = JwtConfig {
        secret: "another-secret".to_string(),
        access_token_expiry: 3600,
    };
    let token = create_access_token(
        Uuid::new_v4(),
        "Test User",
        "test@farm.test",
        "SuperAdmin",
        &other_config,
    )
    .unwrap();

    let status = probe(app, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
