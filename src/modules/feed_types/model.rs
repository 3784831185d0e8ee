use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FeedType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedTypeDto {
    #[validate(custom(function = not_blank))]
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFeedTypeDto {
    #[validate(custom(function = not_blank))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
}
