use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::events::{WeightRecorded, dispatch_weight_recorded};
use crate::utils::pagination::PaginationMeta;

use super::model::{
    CreateWeightRecordDto, PaginatedWeightsResponse, UpdateWeightRecordDto, WeightFilterParams,
    WeightRecord,
};

const WEIGHT_COLUMNS: &str =
    "id, animal_id, weight, recorded_on, notes, created_at, updated_at";

pub struct WeightService;

impl WeightService {
    /// Insert a weight record and dispatch the denormalization trigger.
    ///
    /// The trigger runs after the insert commits and is not awaited; its
    /// failure never affects this function's result.
    #[instrument(skip(db, dto))]
    pub async fn create_weight_record(
        db: &PgPool,
        dto: CreateWeightRecordDto,
    ) -> Result<WeightRecord, AppError> {
        let animal_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
                .bind(dto.animal_id)
                .fetch_one(db)
                .await?;

        if !animal_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Animal not found")));
        }

        let record = sqlx::query_as::<_, WeightRecord>(&format!(
            r#"INSERT INTO weight_records (animal_id, weight, recorded_on, notes)
               VALUES ($1, $2, $3, $4)
               RETURNING {WEIGHT_COLUMNS}"#
        ))
        .bind(dto.animal_id)
        .bind(dto.weight)
        .bind(dto.recorded_on)
        .bind(&dto.notes)
        .fetch_one(db)
        .await?;

        dispatch_weight_recorded(
            db.clone(),
            WeightRecorded {
                animal_id: record.animal_id,
            },
        );

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn get_weight_records(
        db: &PgPool,
        filters: WeightFilterParams,
    ) -> Result<PaginatedWeightsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let (total, records) = if let Some(animal_id) = filters.animal_id {
            let total = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM weight_records WHERE animal_id = $1",
            )
            .bind(animal_id)
            .fetch_one(db)
            .await?;

            let records = sqlx::query_as::<_, WeightRecord>(&format!(
                "SELECT {WEIGHT_COLUMNS} FROM weight_records WHERE animal_id = $1 \
                 ORDER BY recorded_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .bind(animal_id)
            .fetch_all(db)
            .await?;

            (total, records)
        } else {
            let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM weight_records")
                .fetch_one(db)
                .await?;

            let records = sqlx::query_as::<_, WeightRecord>(&format!(
                "SELECT {WEIGHT_COLUMNS} FROM weight_records \
                 ORDER BY recorded_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .fetch_all(db)
            .await?;

            (total, records)
        };

        Ok(PaginatedWeightsResponse {
            data: records,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_weight_record_by_id(db: &PgPool, id: Uuid) -> Result<WeightRecord, AppError> {
        sqlx::query_as::<_, WeightRecord>(&format!(
            "SELECT {WEIGHT_COLUMNS} FROM weight_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Weight record not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_weight_record(
        db: &PgPool,
        id: Uuid,
        dto: UpdateWeightRecordDto,
    ) -> Result<WeightRecord, AppError> {
        let existing = Self::get_weight_record_by_id(db, id).await?;

        let record = sqlx::query_as::<_, WeightRecord>(&format!(
            r#"UPDATE weight_records
               SET weight = $1, recorded_on = $2, notes = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {WEIGHT_COLUMNS}"#
        ))
        .bind(dto.weight.unwrap_or(existing.weight))
        .bind(dto.recorded_on.unwrap_or(existing.recorded_on))
        .bind(dto.notes.or(existing.notes))
        .bind(id)
        .fetch_one(db)
        .await?;

        dispatch_weight_recorded(
            db.clone(),
            WeightRecorded {
                animal_id: record.animal_id,
            },
        );

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn delete_weight_record(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let animal_id = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM weight_records WHERE id = $1 RETURNING animal_id",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Weight record not found")))?;

        dispatch_weight_recorded(db.clone(), WeightRecorded { animal_id });

        Ok(())
    }
}
