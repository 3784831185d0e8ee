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
    Animal, AnimalFilterParams, CreateAnimalDto, PaginatedAnimalsResponse, UpdateAnimalDto,
};
use super::service::AnimalService;

#[utoipa::path(
    post,
    path = "/api/animals",
    request_body = CreateAnimalDto,
    responses(
        (status = 201, description = "Animal created", body = Animal),
        (status = 400, description = "Missing or blank required field"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Duplicate tag")
    ),
    tag = "Animals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_animal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateAnimalDto>,
) -> Result<(StatusCode, Json<Animal>), AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let animal = AnimalService::create_animal(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(animal)))
}

#[utoipa::path(
    get,
    path = "/api/animals",
    params(AnimalFilterParams),
    responses(
        (status = 200, description = "List of animals", body = PaginatedAnimalsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Animals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_animals(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(filters): Query<AnimalFilterParams>,
) -> Result<Json<PaginatedAnimalsResponse>, AppError> {
    let animals = AnimalService::get_animals(&state.db, filters).await?;
    Ok(Json(animals))
}

#[utoipa::path(
    get,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal ID")),
    responses(
        (status = 200, description = "Animal details", body = Animal),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Animal not found")
    ),
    tag = "Animals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_animal_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Animal>, AppError> {
    let animal = AnimalService::get_animal_by_id(&state.db, id).await?;
    Ok(Json(animal))
}

#[utoipa::path(
    put,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal ID")),
    request_body = UpdateAnimalDto,
    responses(
        (status = 200, description = "Animal updated", body = Animal),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Animal not found"),
        (status = 409, description = "Duplicate tag")
    ),
    tag = "Animals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_animal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateAnimalDto>,
) -> Result<Json<Animal>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let animal = AnimalService::update_animal(&state.db, id, dto).await?;
    Ok(Json(animal))
}

#[utoipa::path(
    delete,
    path = "/api/animals/{id}",
    params(("id" = Uuid, Path, description = "Animal ID")),
    responses(
        (status = 200, description = "Animal deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Animal not found")
    ),
    tag = "Animals",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_animal(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    AnimalService::delete_animal(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Animal deleted".to_string(),
    }))
}
