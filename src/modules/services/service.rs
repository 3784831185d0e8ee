use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};

use super::model::{CreateServiceDto, FarmService, UpdateServiceDto};

const SERVICE_COLUMNS: &str = "id, name, description, price, active, created_at, updated_at";

pub struct ServiceCatalog;

impl ServiceCatalog {
    #[instrument(skip(db, dto))]
    pub async fn create_service(db: &PgPool, dto: CreateServiceDto) -> Result<FarmService, AppError> {
        let service = sqlx::query_as::<_, FarmService>(&format!(
            r#"INSERT INTO services (name, description, price, active)
               VALUES ($1, $2, $3, $4)
               RETURNING {SERVICE_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(dto.price)
        .bind(dto.active.unwrap_or(true))
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A service with this name already exists"))?;

        Ok(service)
    }

    #[instrument(skip(db))]
    pub async fn get_services(db: &PgPool) -> Result<Vec<FarmService>, AppError> {
        let services = sqlx::query_as::<_, FarmService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services ORDER BY name"
        ))
        .fetch_all(db)
        .await?;

        Ok(services)
    }

    #[instrument(skip(db))]
    pub async fn get_service_by_id(db: &PgPool, id: Uuid) -> Result<FarmService, AppError> {
        sqlx::query_as::<_, FarmService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Service not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_service(
        db: &PgPool,
        id: Uuid,
        dto: UpdateServiceDto,
    ) -> Result<FarmService, AppError> {
        let existing = Self::get_service_by_id(db, id).await?;

        let service = sqlx::query_as::<_, FarmService>(&format!(
            r#"UPDATE services
               SET name = $1, description = $2, price = $3, active = $4, updated_at = NOW()
               WHERE id = $5
               RETURNING {SERVICE_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.description.or(existing.description))
        .bind(dto.price.or(existing.price))
        .bind(dto.active.unwrap_or(existing.active))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A service with this name already exists"))?;

        Ok(service)
    }

    #[instrument(skip(db))]
    pub async fn delete_service(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Service not found")));
        }

        Ok(())
    }
}
