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
    CreateWeightRecordDto, PaginatedWeightsResponse, UpdateWeightRecordDto, WeightFilterParams,
    WeightRecord,
};
use super::service::WeightService;

#[utoipa::path(
    post,
    path = "/api/weight-records",
    request_body = CreateWeightRecordDto,
    responses(
        (status = 201, description = "Weight record created", body = WeightRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Animal not found")
    ),
    tag = "Weights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_weight_record(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateWeightRecordDto>,
) -> Result<(StatusCode, Json<WeightRecord>), AppError> {
    // Any authenticated role may record a weighing; attendants do this daily
    let record = WeightService::create_weight_record(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/weight-records",
    params(WeightFilterParams),
    responses(
        (status = 200, description = "List of weight records", body = PaginatedWeightsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Weights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_weight_records(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<WeightFilterParams>,
) -> Result<Json<PaginatedWeightsResponse>, AppError> {
    let records = WeightService::get_weight_records(&state.db, filters).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/weight-records/{id}",
    params(("id" = Uuid, Path, description = "Weight record ID")),
    responses(
        (status = 200, description = "Weight record details", body = WeightRecord),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight record not found")
    ),
    tag = "Weights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_weight_record_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<WeightRecord>, AppError> {
    let record = WeightService::get_weight_record_by_id(&state.db, id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/weight-records/{id}",
    params(("id" = Uuid, Path, description = "Weight record ID")),
    request_body = UpdateWeightRecordDto,
    responses(
        (status = 200, description = "Weight record updated", body = WeightRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Weight record not found")
    ),
    tag = "Weights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_weight_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateWeightRecordDto>,
) -> Result<Json<WeightRecord>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let record = WeightService::update_weight_record(&state.db, id, dto).await?;
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/weight-records/{id}",
    params(("id" = Uuid, Path, description = "Weight record ID")),
    responses(
        (status = 200, description = "Weight record deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Weight record not found")
    ),
    tag = "Weights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_weight_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    WeightService::delete_weight_record(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Weight record deleted".to_string(),
    }))
}
