use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};

use super::model::{CreateMedicationDto, Medication, UpdateMedicationDto};

const MEDICATION_COLUMNS: &str =
    "id, name, description, dosage, withdrawal_days, created_at, updated_at";

pub struct MedicationService;

impl MedicationService {
    #[instrument(skip(db, dto))]
    pub async fn create_medication(
        db: &PgPool,
        dto: CreateMedicationDto,
    ) -> Result<Medication, AppError> {
        let medication = sqlx::query_as::<_, Medication>(&format!(
            r#"INSERT INTO medications (name, description, dosage, withdrawal_days)
               VALUES ($1, $2, $3, $4)
               RETURNING {MEDICATION_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(&dto.dosage)
        .bind(dto.withdrawal_days)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A medication with this name already exists"))?;

        Ok(medication)
    }

    #[instrument(skip(db))]
    pub async fn get_medications(db: &PgPool) -> Result<Vec<Medication>, AppError> {
        let medications = sqlx::query_as::<_, Medication>(&format!(
            "SELECT {MEDICATION_COLUMNS} FROM medications ORDER BY name"
        ))
        .fetch_all(db)
        .await?;

        Ok(medications)
    }

    #[instrument(skip(db))]
    pub async fn get_medication_by_id(db: &PgPool, id: Uuid) -> Result<Medication, AppError> {
        sqlx::query_as::<_, Medication>(&format!(
            "SELECT {MEDICATION_COLUMNS} FROM medications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Medication not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_medication(
        db: &PgPool,
        id: Uuid,
        dto: UpdateMedicationDto,
    ) -> Result<Medication, AppError> {
        let existing = Self::get_medication_by_id(db, id).await?;

        let medication = sqlx::query_as::<_, Medication>(&format!(
            r#"UPDATE medications
               SET name = $1, description = $2, dosage = $3, withdrawal_days = $4, updated_at = NOW()
               WHERE id = $5
               RETURNING {MEDICATION_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.description.or(existing.description))
        .bind(dto.dosage.or(existing.dosage))
        .bind(dto.withdrawal_days.or(existing.withdrawal_days))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A medication with this name already exists"))?;

        Ok(medication)
    }

    #[instrument(skip(db))]
    pub async fn delete_medication(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM medications WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Medication not found")));
        }

        Ok(())
    }
}
