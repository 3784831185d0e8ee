//! Location endpoints. The whole router is layered with the management-role
//! middleware, so handlers here never see an Attendant request.

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

use super::model::{CreateLocationDto, Location, UpdateLocationDto};
use super::service::LocationService;

#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Location name already exists")
    ),
    tag = "Locations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateLocationDto>,
) -> Result<(StatusCode, Json<Location>), AppError> {
    let location = LocationService::create_location(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List of locations", body = Vec<Location>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin")
    ),
    tag = "Locations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, AppError> {
    let locations = LocationService::get_locations(&state.db).await?;
    Ok(Json(locations))
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(("id" = Uuid, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location details", body = Location),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Location not found")
    ),
    tag = "Locations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_location_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Location>, AppError> {
    let location = LocationService::get_location_by_id(&state.db, id).await?;
    Ok(Json(location))
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    params(("id" = Uuid, Path, description = "Location ID")),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Location not found"),
        (status = 409, description = "Location name already exists")
    ),
    tag = "Locations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateLocationDto>,
) -> Result<Json<Location>, AppError> {
    let location = LocationService::update_location(&state.db, id, dto).await?;
    Ok(Json(location))
}

#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(("id" = Uuid, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Location not found")
    ),
    tag = "Locations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_location(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    // The router layer admits managers; deletion is tighter
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    LocationService::delete_location(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Location deleted".to_string(),
    }))
}
