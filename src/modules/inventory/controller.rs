//! Inventory endpoints. Both routers sit behind the management-role layer;
//! deletes tighten to SuperAdmin inside the handlers.

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
    CreateInventoryCategoryDto, CreateInventoryItemDto, InventoryCategory, InventoryFilterParams,
    InventoryItem, UpdateInventoryCategoryDto, UpdateInventoryItemDto,
};
use super::service::InventoryService;

#[utoipa::path(
    post,
    path = "/api/inventory-categories",
    request_body = CreateInventoryCategoryDto,
    responses(
        (status = 201, description = "Category created", body = InventoryCategory),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateInventoryCategoryDto>,
) -> Result<(StatusCode, Json<InventoryCategory>), AppError> {
    let category = InventoryService::create_category(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    get,
    path = "/api/inventory-categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<InventoryCategory>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryCategory>>, AppError> {
    let categories = InventoryService::get_categories(&state.db).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/inventory-categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = InventoryCategory),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Category not found")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InventoryCategory>, AppError> {
    let category = InventoryService::get_category_by_id(&state.db, id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    put,
    path = "/api/inventory-categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateInventoryCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = InventoryCategory),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category name already exists")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateInventoryCategoryDto>,
) -> Result<Json<InventoryCategory>, AppError> {
    let category = InventoryService::update_category(&state.db, id, dto).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/inventory-categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Category not found")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    InventoryService::delete_category(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Category deleted".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateInventoryItemDto,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryItem),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Item name already exists in this category")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateInventoryItemDto>,
) -> Result<(StatusCode, Json<InventoryItem>), AppError> {
    let item = InventoryService::create_item(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    params(InventoryFilterParams),
    responses(
        (status = 200, description = "List of inventory items", body = Vec<InventoryItem>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_items(
    State(state): State<AppState>,
    Query(filters): Query<InventoryFilterParams>,
) -> Result<Json<Vec<InventoryItem>>, AppError> {
    let items = InventoryService::get_items(&state.db, filters).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item details", body = InventoryItem),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Inventory item not found")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InventoryItem>, AppError> {
    let item = InventoryService::get_item_by_id(&state.db, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    request_body = UpdateInventoryItemDto,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryItem),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires Manager or SuperAdmin"),
        (status = 404, description = "Inventory item not found"),
        (status = 409, description = "Item name already exists in this category")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateInventoryItemDto>,
) -> Result<Json<InventoryItem>, AppError> {
    let item = InventoryService::update_item(&state.db, id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    params(("id" = Uuid, Path, description = "Inventory item ID")),
    responses(
        (status = 200, description = "Inventory item deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - requires SuperAdmin"),
        (status = 404, description = "Inventory item not found")
    ),
    tag = "Inventory",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    check_any_role(&auth_user, &[UserRole::SuperAdmin])?;

    InventoryService::delete_item(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Inventory item deleted".to_string(),
    }))
}
