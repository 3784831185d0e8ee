use axum::{
    Json,
    extract::{Path, Query, State},
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

use super::model::{
    BreedingFilterParams, BreedingRecord, CreateBreedingRecordDto, PaginatedBreedingResponse,
    UpdateBreedingRecordDto,
};
use super::service::BreedingService;

#[utoipa::path(
    post,
    path = "/api/breeding-records",
    request_body = CreateBreedingRecordDto,
    responses(
        (status = 201, description = "Breeding record created", body = BreedingRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Dam or sire not found")
    ),
    tag = "Breeding",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_breeding_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateBreedingRecordDto>,
) -> Result<(StatusCode, Json<BreedingRecord>), AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let record = BreedingService::create_breeding_record(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/breeding-records",
    params(BreedingFilterParams),
    responses(
        (status = 200, description = "List of breeding records", body = PaginatedBreedingResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Breeding",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_breeding_records(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<BreedingFilterParams>,
) -> Result<Json<PaginatedBreedingResponse>, AppError> {
    let records = BreedingService::get_breeding_records(&state.db, filters).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/breeding-records/{id}",
    params(("id" = Uuid, Path, description = "Breeding record ID")),
    responses(
        (status = 200, description = "Breeding record details", body = BreedingRecord),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Breeding record not found")
    ),
    tag = "Breeding",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_breeding_record_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BreedingRecord>, AppError> {
    let record = BreedingService::get_breeding_record_by_id(&state.db, id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/breeding-records/{id}",
    params(("id" = Uuid, Path, description = "Breeding record ID")),
    request_body = UpdateBreedingRecordDto,
    responses(
        (status = 200, description = "Breeding record updated", body = BreedingRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Breeding record not found")
    ),
    tag = "Breeding",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_breeding_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateBreedingRecordDto>,
) -> Result<Json<BreedingRecord>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let record = BreedingService::update_breeding_record(&state.db, id, dto).await?;
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/breeding-records/{id}",
    params(("id" = Uuid, Path, description = "Breeding record ID")),
    responses(
        (status = 200, description = "Breeding record deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Breeding record not found")
    ),
    tag = "Breeding",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_breeding_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    BreedingService::delete_breeding_record(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Breeding record deleted".to_string(),
    }))
}
