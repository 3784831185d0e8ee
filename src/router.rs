use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::require_manager;
use crate::modules::animals::router::init_animals_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::breeding::router::init_breeding_router;
use crate::modules::feed_types::router::init_feed_types_router;
use crate::modules::inventory::router::{
    init_inventory_categories_router, init_inventory_router,
};
use crate::modules::locations::router::init_locations_router;
use crate::modules::medications::router::init_medications_router;
use crate::modules::services::router::init_services_router;
use crate::modules::vaccinations::router::init_vaccinations_router;
use crate::modules::weights::router::init_weights_router;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed(anyhow::anyhow!("Method not allowed"))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/animals", init_animals_router())
                .nest("/weight-records", init_weights_router())
                .nest("/breeding-records", init_breeding_router())
                .nest("/feed-types", init_feed_types_router())
                .nest("/vaccination-records", init_vaccinations_router())
                .nest("/medications", init_medications_router())
                .nest("/services", init_services_router())
                // Locations and stock are management data; attendants never
                // see them, so these routers are gated as a whole
                .nest(
                    "/locations",
                    init_locations_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_manager,
                    )),
                )
                .nest(
                    "/inventory",
                    init_inventory_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_manager,
                    )),
                )
                .nest(
                    "/inventory-categories",
                    init_inventory_categories_router().route_layer(
                        middleware::from_fn_with_state(state.clone(), require_manager),
                    ),
                ),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
