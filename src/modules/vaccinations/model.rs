use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validator::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VaccinationRecord {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub medication_id: Option<Uuid>,
    pub vaccine: String,
    pub administered_on: NaiveDate,
    pub next_due: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVaccinationRecordDto {
    pub animal_id: Uuid,
    pub medication_id: Option<Uuid>,
    #[validate(custom(function = not_blank))]
    pub vaccine: String,
    pub administered_on: NaiveDate,
    pub next_due: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVaccinationRecordDto {
    pub medication_id: Option<Uuid>,
    #[validate(custom(function = not_blank))]
    pub vaccine: Option<String>,
    pub administered_on: Option<NaiveDate>,
    pub next_due: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct VaccinationFilterParams {
    pub animal_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedVaccinationsResponse {
    pub data: Vec<VaccinationRecord>,
    pub meta: crate::utils::pagination::PaginationMeta,
}
