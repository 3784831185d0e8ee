use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    CreateVaccinationRecordDto, PaginatedVaccinationsResponse, UpdateVaccinationRecordDto,
    VaccinationFilterParams, VaccinationRecord,
};

const VACCINATION_COLUMNS: &str = "id, animal_id, medication_id, vaccine, administered_on, \
                                   next_due, notes, created_at, updated_at";

pub struct VaccinationService;

impl VaccinationService {
    #[instrument(skip(db, dto))]
    pub async fn create_vaccination_record(
        db: &PgPool,
        dto: CreateVaccinationRecordDto,
    ) -> Result<VaccinationRecord, AppError> {
        let animal_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM animals WHERE id = $1)")
                .bind(dto.animal_id)
                .fetch_one(db)
                .await?;
        if !animal_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Animal not found")));
        }

        if let Some(medication_id) = dto.medication_id {
            let medication_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM medications WHERE id = $1)",
            )
            .bind(medication_id)
            .fetch_one(db)
            .await?;
            if !medication_exists {
                return Err(AppError::not_found(anyhow::anyhow!("Medication not found")));
            }
        }

        let record = sqlx::query_as::<_, VaccinationRecord>(&format!(
            r#"INSERT INTO vaccination_records
                   (animal_id, medication_id, vaccine, administered_on, next_due, notes)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {VACCINATION_COLUMNS}"#
        ))
        .bind(dto.animal_id)
        .bind(dto.medication_id)
        .bind(dto.vaccine.trim())
        .bind(dto.administered_on)
        .bind(dto.next_due)
        .bind(&dto.notes)
        .fetch_one(db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn get_vaccination_records(
        db: &PgPool,
        filters: VaccinationFilterParams,
    ) -> Result<PaginatedVaccinationsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let (total, records) = if let Some(animal_id) = filters.animal_id {
            let total = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM vaccination_records WHERE animal_id = $1",
            )
            .bind(animal_id)
            .fetch_one(db)
            .await?;

            let records = sqlx::query_as::<_, VaccinationRecord>(&format!(
                "SELECT {VACCINATION_COLUMNS} FROM vaccination_records WHERE animal_id = $1 \
                 ORDER BY administered_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .bind(animal_id)
            .fetch_all(db)
            .await?;

            (total, records)
        } else {
            let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vaccination_records")
                .fetch_one(db)
                .await?;

            let records = sqlx::query_as::<_, VaccinationRecord>(&format!(
                "SELECT {VACCINATION_COLUMNS} FROM vaccination_records \
                 ORDER BY administered_on DESC, created_at DESC LIMIT {limit} OFFSET {offset}"
            ))
            .fetch_all(db)
            .await?;

            (total, records)
        };

        Ok(PaginatedVaccinationsResponse {
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
    pub async fn get_vaccination_record_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<VaccinationRecord, AppError> {
        sqlx::query_as::<_, VaccinationRecord>(&format!(
            "SELECT {VACCINATION_COLUMNS} FROM vaccination_records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Vaccination record not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_vaccination_record(
        db: &PgPool,
        id: Uuid,
        dto: UpdateVaccinationRecordDto,
    ) -> Result<VaccinationRecord, AppError> {
        let existing = Self::get_vaccination_record_by_id(db, id).await?;

        let record = sqlx::query_as::<_, VaccinationRecord>(&format!(
            r#"UPDATE vaccination_records
               SET medication_id = $1, vaccine = $2, administered_on = $3, next_due = $4,
                   notes = $5, updated_at = NOW()
               WHERE id = $6
               RETURNING {VACCINATION_COLUMNS}"#
        ))
        .bind(dto.medication_id.or(existing.medication_id))
        .bind(
            dto.vaccine
                .map(|v| v.trim().to_string())
                .unwrap_or(existing.vaccine),
        )
        .bind(dto.administered_on.unwrap_or(existing.administered_on))
        .bind(dto.next_due.or(existing.next_due))
        .bind(dto.notes.or(existing.notes))
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(record)
    }

    #[instrument(skip(db))]
    pub async fn delete_vaccination_record(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vaccination_records WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Vaccination record not found"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::animals::model::CreateAnimalDto;
    use crate::modules::animals::service::AnimalService;
    use axum::http::StatusCode;
    use chrono::NaiveDate;

    async fn create_test_animal(pool: &PgPool, tag: &str) -> Uuid {
        AnimalService::create_animal(
            pool,
            CreateAnimalDto {
                tag: tag.to_string(),
                name: None,
                species: "sheep".to_string(),
                breed: None,
                sex: "female".to_string(),
                date_of_birth: None,
                location_id: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn vaccination_dto(animal_id: Uuid, vaccine: &str) -> CreateVaccinationRecordDto {
        CreateVaccinationRecordDto {
            animal_id,
            medication_id: None,
            vaccine: vaccine.to_string(),
            administered_on: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            next_due: NaiveDate::from_ymd_opt(2025, 4, 15),
            notes: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_and_fetch(pool: PgPool) {
        let animal_id = create_test_animal(&pool, "V-001").await;

        let record =
            VaccinationService::create_vaccination_record(&pool, vaccination_dto(animal_id, "Clostridial 8-way"))
                .await
                .unwrap();

        let fetched = VaccinationService::get_vaccination_record_by_id(&pool, record.id)
            .await
            .unwrap();
        assert_eq!(fetched.vaccine, "Clostridial 8-way");
        assert_eq!(fetched.animal_id, animal_id);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_for_missing_animal(pool: PgPool) {
        let err = VaccinationService::create_vaccination_record(
            &pool,
            vaccination_dto(Uuid::new_v4(), "Rabies"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_with_missing_medication(pool: PgPool) {
        let animal_id = create_test_animal(&pool, "V-002").await;
        let mut dto = vaccination_dto(animal_id, "Rabies");
        dto.medication_id = Some(Uuid::new_v4());

        let err = VaccinationService::create_vaccination_record(&pool, dto)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_filter_by_animal(pool: PgPool) {
        let animal_a = create_test_animal(&pool, "V-010").await;
        let animal_b = create_test_animal(&pool, "V-011").await;

        VaccinationService::create_vaccination_record(&pool, vaccination_dto(animal_a, "Rabies"))
            .await
            .unwrap();
        VaccinationService::create_vaccination_record(&pool, vaccination_dto(animal_b, "Rabies"))
            .await
            .unwrap();

        let filtered = VaccinationService::get_vaccination_records(
            &pool,
            VaccinationFilterParams {
                animal_id: Some(animal_a),
                pagination: Default::default(),
            },
        )
        .await
        .unwrap();

        assert_eq!(filtered.meta.total, 1);
        assert_eq!(filtered.data[0].animal_id, animal_a);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_then_repeat_not_found(pool: PgPool) {
        let animal_id = create_test_animal(&pool, "V-020").await;
        let record =
            VaccinationService::create_vaccination_record(&pool, vaccination_dto(animal_id, "Rabies"))
                .await
                .unwrap();

        VaccinationService::delete_vaccination_record(&pool, record.id)
            .await
            .unwrap();
        let err = VaccinationService::delete_vaccination_record(&pool, record.id)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
