use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocationDto {
    #[validate(custom(function = not_blank))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocationDto {
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
}
