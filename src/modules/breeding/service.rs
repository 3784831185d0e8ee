use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    BreedingFilterParams, BreedingRecord, CreateBreedingRecordDto, PaginatedBreedingResponse,
    UpdateBreedingRecordDto,
};

const BREEDING_COLUMNS: &str =
    "id, dam_id, sire_id, bred_on, expected_due, outcome, notes, created_at, updated_at";

async fn animal_exists(db: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
            .bind(id)
            .fetch_one(db)
            .await?;
    Ok(exists)
}

pub struct BreedingService;

impl BreedingService {
    #[instrument(skip(db, dto))]
    pub async fn create_breeding_record(
        db: &PgPool,
        dto: CreateBreedingRecordDto,
    ) -> Result<BreedingRecord, AppError> {
        if !animal_exists(db, dto.dam_id).await? {
            return Err(AppError::not_found(anyhow::anyhow!("Dam not found")));
        }
        if let Some(sire_id) = dto.sire_id
            && !animal_exists(db, sire_id).await?
        {
            return Err(AppError::not_found(anyhow::anyhow!("Sire not found")));
        }

        let record = sqlx::query_as::<_, BreedingRecord>(&format!(
            r#"INSERT INTO breeding_records (dam_id, sire_id, bred_on, expected_due, outcome, notes)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {BREEDING_COLUMNS}"#
        ))
        .bind(dto.dam_id)
        .bind(dto.sire_id)
        .bind(dto.bred_on)
        .bind(dto.expected_due)
        .bind(&dto.outcome)
        .bind(&dto.notes)
        .fetch_one(db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn get_breeding_records(
        db: &PgPool,
        filters: BreedingFilterParams,
    ) -> Result<PaginatedBreedingResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let (total, records) = if let Some(dam_id) = filters.dam_id {
            let total = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM breeding_records WHERE dam_id = $1",
            )
            .bind(dam_id)
            .fetch_one(db)
            .await?;

            let records = sqlx::query_as::<_, BreedingRecord>(&format!(
                "SELECT {BREEDING_COLUMNS} FROM breeding_records WHERE dam_id = $1 \
                 ORDER BY bred_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .bind(dam_id)
            .fetch_all(db)
            .await?;

            (total, records)
        } else {
            let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM breeding_records")
                .fetch_one(db)
                .await?;

            let records = sqlx::query_as::<_, BreedingRecord>(&format!(
                "SELECT {BREEDING_COLUMNS} FROM breeding_records \
                 ORDER BY bred_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .fetch_all(db)
            .await?;

            (total, records)
        };

        Ok(PaginatedBreedingResponse {
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
    pub async fn get_breeding_record_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<BreedingRecord, AppError> {
        sqlx::query_as::<_, BreedingRecord>(&format!(
            "SELECT {BREEDING_COLUMNS} FROM breeding_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Breeding record not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_breeding_record(
        db: &PgPool,
        id: Uuid,
        dto: UpdateBreedingRecordDto,
    ) -> Result<BreedingRecord, AppError> {
        let existing = Self::get_breeding_record_by_id(db, id).await?;

        if let Some(sire_id) = dto.sire_id
            && !animal_exists(db, sire_id).await?
        {
            return Err(AppError::not_found(anyhow::anyhow!("Sire not found")));
        }

        let record = sqlx::query_as::<_, BreedingRecord>(&format!(
            r#"UPDATE breeding_records
               SET sire_id = $1, bred_on = $2, expected_due = $3, outcome = $4, notes = $5,
                   updated_at = NOW()
               WHERE id = $6
               RETURNING {BREEDING_COLUMNS}"#
        ))
        .bind(dto.sire_id.or(existing.sire_id))
        .bind(dto.bred_on.unwrap_or(existing.bred_on))
        .bind(dto.expected_due.or(existing.expected_due))
        .bind(dto.outcome.or(existing.outcome))
        .bind(dto.notes.or(existing.notes))
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn delete_breeding_record(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM breeding_records WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Breeding record not found"
            )));
        }

        Ok(())
    }
}
