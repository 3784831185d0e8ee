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

use super::model::{CreateFeedTypeDto, FeedType, UpdateFeedTypeDto};
use super::service::FeedTypeService;

#[utoipa::path(
    post,
    path = "/api/feed-types",
    request_body = CreateFeedTypeDto,
    responses(
        (status = 201, description = "Feed type created", body = FeedType),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Feed type name already exists")
    ),
    tag = "Feed Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_feed_type(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateFeedTypeDto>,
) -> Result<(StatusCode, Json<FeedType>), AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let feed_type = FeedTypeService::create_feed_type(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(feed_type)))
}

#[utoipa::path(
    get,
    path = "/api/feed-types",
    responses(
        (status = 200, description = "List of feed types", body = Vec<FeedType>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Feed Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_feed_types(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<FeedType>>, AppError> {
    let feed_types = FeedTypeService::get_feed_types(&state.db).await?;
    Ok(Json(feed_types))
}

#[utoipa::path(
    get,
    path = "/api/feed-types/{id}",
    params(("id" = Uuid, Path, description = "Feed type ID")),
    responses(
        (status = 200, description = "Feed type details", body = FeedType),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Feed type not found")
    ),
    tag = "Feed Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_feed_type_by_id(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedType>, AppError> {
    let feed_type = FeedTypeService::get_feed_type_by_id(&state.db, id).await?;
    Ok(Json(feed_type))
}

#[utoipa::path(
    put,
    path = "/api/feed-types/{id}",
    params(("id" = Uuid, Path, description = "Feed type ID")),
    request_body = UpdateFeedTypeDto,
    responses(
        (status = 200, description = "Feed type updated", body = FeedType),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Feed type not found"),
        (status = 409, description = "Feed type name already exists")
    ),
    tag = "Feed Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_feed_type(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateFeedTypeDto>,
) -> Result<Json<FeedType>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin, UserRole::Manager])?;

    let feed_type = FeedTypeService::update_feed_type(&state.db, id, dto).await?;
    Ok(Json(feed_type))
}

#[utoipa::path(
    delete,
    path = "/api/feed-types/{id}",
    params(("id" = Uuid, Path, description = "Feed type ID")),
    responses(
        (status = 200, description = "Feed type deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Feed type not found")
    ),
    tag = "Feed Types",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_feed_type(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    FeedTypeService::delete_feed_type(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Feed type deleted".to_string(),
    }))
}
