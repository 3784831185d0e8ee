use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::check_any_role;
use crate::modules::auth::model::{MessageResponse, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateServiceDto, FarmService, UpdateServiceDto};
use super::service::ServiceCatalog;

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = FarmService),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Service name already exists")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<FarmService>), AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let service = ServiceCatalog::create_service(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "List of services", body = Vec<FarmService>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_services(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<FarmService>>, AppError> {
    let services = ServiceCatalog::get_services(&state.db).await?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = FarmService),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_service_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<FarmService>, AppError> {
    let service = ServiceCatalog::get_service_by_id(&state.db, id).await?;
    Ok(Json(service))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = FarmService),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Service name already exists")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateServiceDto>,
) -> Result<Json<FarmService>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let service = ServiceCatalog::update_service(&state.db, id, dto).await?;
    Ok(Json(service))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Service not found")
    ),
    tag = "Services",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_service(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    ServiceCatalog::delete_service(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Service deleted".to_string(),
    }))
}
