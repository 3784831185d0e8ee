use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeightRecord {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub weight: f64,
    pub recorded_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWeightRecordDto {
    pub animal_id: Uuid,
    #[validate(range(min = 0.01))]
    pub weight: f64,
    pub recorded_on: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWeightRecordDto {
    #[validate(range(min = 0.01))]
    pub weight: Option<f64>,
    pub recorded_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct WeightFilterParams {
    pub animal_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedWeightsResponse {
    pub data: Vec<WeightRecord>,
    pub meta: crate::utils::pagination::PaginationMeta,
}
