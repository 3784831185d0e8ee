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

use super::model::{CreateMedicationDto, Medication, UpdateMedicationDto};
use super::service::MedicationService;

#[utoipa::path(
    post,
    path = "/api/medications",
    request_body = CreateMedicationDto,
    responses(
        (status = 201, description = "Medication created", body = Medication),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Medication name already exists")
    ),
    tag = "Medications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_medication(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateMedicationDto>,
) -> Result<(StatusCode, Json<Medication>), AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let medication = MedicationService::create_medication(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(medication)))
}

#[utoipa::path(
    get,
    path = "/api/medications",
    responses(
        (status = 200, description = "List of medications", body = Vec<Medication>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Medications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_medications(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Medication>>, AppError> {
    let medications = MedicationService::get_medications(&state.db).await?;
    Ok(Json(medications))
}

#[utoipa::path(
    get,
    path = "/api/medications/{id}",
    params(("id" = Uuid, Path, description = "Medication ID")),
    responses(
        (status = 200, description = "Medication details", body = Medication),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Medication not found")
    ),
    tag = "Medications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_medication_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Medication>, AppError> {
    let medication = MedicationService::get_medication_by_id(&state.db, id).await?;
    Ok(Json(medication))
}

#[utoipa::path(
    put,
    path = "/api/medications/{id}",
    params(("id" = Uuid, Path, description = "Medication ID")),
    request_body = UpdateMedicationDto,
    responses(
        (status = 200, description = "Medication updated", body = Medication),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Medication not found"),
        (status = 409, description = "Medication name already exists")
    ),
    tag = "Medications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_medication(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateMedicationDto>,
) -> Result<Json<Medication>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let medication = MedicationService::update_medication(&state.db, id, dto).await?;
    Ok(Json(medication))
}

#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    params(("id" = Uuid, Path, description = "Medication ID")),
    responses(
        (status = 200, description = "Medication deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Medication not found")
    ),
    tag = "Medications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_medication(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    MedicationService::delete_medication(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Medication deleted".to_string(),
    }))
}
