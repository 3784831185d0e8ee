use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BreedingRecord {
    pub id: Uuid,
    pub dam_id: Uuid,
    pub sire_id: Option<Uuid>,
    pub bred_on: NaiveDate,
    pub expected_due: Option<NaiveDate>,
    pub outcome: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBreedingRecordDto {
    pub dam_id: Uuid,
    pub sire_id: Option<Uuid>,
    pub bred_on: NaiveDate,
    pub expected_due: Option<NaiveDate>,
    #[validate(custom(function = not_blank))]
    pub outcome: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBreedingRecordDto {
    pub sire_id: Option<Uuid>,
    pub bred_on: Option<NaiveDate>,
    pub expected_due: Option<NaiveDate>,
    #[validate(custom(function = not_blank))]
    pub outcome: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct BreedingFilterParams {
    pub dam_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedBreedingResponse {
    pub data: Vec<BreedingRecord>,
    pub meta: crate::utils::pagination::PaginationMeta,
}
