use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryCategoryDto {
    #[validate(custom(function = not_blank))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryCategoryDto {
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub reorder_level: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryItemDto {
    #[validate(custom(function = not_blank))]
    pub name: String,
    pub category_id: Option<Uuid>,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub reorder_level: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryItemDto {
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[validate(range(min = 0.0))]
    pub reorder_level: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct InventoryFilterParams {
    pub category_id: Option<Uuid>,
}
