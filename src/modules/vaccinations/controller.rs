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
    CreateVaccinationRecordDto, PaginatedVaccinationsResponse, UpdateVaccinationRecordDto,
    VaccinationFilterParams, VaccinationRecord,
};
use super::service::VaccinationService;

#[utoipa::path(
    post,
    path = "/api/vaccination-records",
    request_body = CreateVaccinationRecordDto,
    responses(
        (status = 201, description = "Vaccination record created", body = VaccinationRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Animal or medication not found")
    ),
    tag = "Vaccinations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_vaccination_record(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateVaccinationRecordDto>,
) -> Result<(StatusCode, Json<VaccinationRecord>), AppError> {
    // Any authenticated role may log a vaccination given in the field
    let record = VaccinationService::create_vaccination_record(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/vaccination-records",
    params(VaccinationFilterParams),
    responses(
        (status = 200, description = "List of vaccination records", body = PaginatedVaccinationsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Vaccinations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_vaccination_records(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<VaccinationFilterParams>,
) -> Result<Json<PaginatedVaccinationsResponse>, AppError> {
    let records = VaccinationService::get_vaccination_records(&state.db, filters).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/vaccination-records/{id}",
    params(("id" = Uuid, Path, description = "Vaccination record ID")),
    responses(
        (status = 200, description = "Vaccination record details", body = VaccinationRecord),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Vaccination record not found")
    ),
    tag = "Vaccinations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_vaccination_record_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<VaccinationRecord>, AppError> {
    let record = VaccinationService::get_vaccination_record_by_id(&state.db, id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/api/vaccination-records/{id}",
    params(("id" = Uuid, Path, description = "Vaccination record ID")),
    request_body = UpdateVaccinationRecordDto,
    responses(
        (status = 200, description = "Vaccination record updated", body = VaccinationRecord),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Vaccination record not found")
    ),
    tag = "Vaccinations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_vaccination_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateVaccinationRecordDto>,
) -> Result<Json<VaccinationRecord>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let record = VaccinationService::update_vaccination_record(&state.db, id, dto).await?;
    Ok(Json(record))
}

#[utoipa::path(
    delete,
    path = "/api/vaccination-records/{id}",
    params(("id" = Uuid, Path, description = "Vaccination record ID")),
    responses(
        (status = 200, description = "Vaccination record deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Vaccination record not found")
    ),
    tag = "Vaccinations",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_vaccination_record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    VaccinationService::delete_vaccination_record(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Vaccination record deleted".to_string(),
    }))
}
