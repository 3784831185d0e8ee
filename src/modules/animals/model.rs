use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

/// An animal in the herd.
///
/// `current_weight` and `current_weight_date` are denormalized from the
/// latest weight record and kept eventually consistent by the
/// weight-recorded trigger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Animal {
    pub id: Uuid,
    pub tag: String,
    pub name: Option<String>,
    pub species: String,
    pub breed: Option<String>,
    pub sex: String,
    pub status: String,
    pub date_of_birth: Option<NaiveDate>,
    pub location_id: Option<Uuid>,
    pub current_weight: Option<f64>,
    pub current_weight_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAnimalDto {
    #[validate(custom(function = not_blank))]
    pub tag: String,
    pub name: Option<String>,
    #[validate(custom(function = not_blank))]
    pub species: String,
    pub breed: Option<String>,
    #[validate(custom(function = not_blank))]
    pub sex: String,
    pub date_of_birth: Option<NaiveDate>,
    pub location_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAnimalDto {
    #[validate(custom(function = not_blank))]
    pub tag: Option<String>,
    pub name: Option<String>,
    #[validate(custom(function = not_blank))]
    pub species: Option<String>,
    pub breed: Option<String>,
    #[validate(custom(function = not_blank))]
    pub sex: Option<String>,
    #[validate(custom(function = not_blank))]
    pub status: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct AnimalFilterParams {
    pub species: Option<String>,
    pub status: Option<String>,
    pub location_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedAnimalsResponse {
    pub data: Vec<Animal>,
    pub meta: crate::utils::pagination::PaginationMeta,
}
