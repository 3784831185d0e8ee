use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};

use super::model::{CreateFeedTypeDto, FeedType, UpdateFeedTypeDto};

const FEED_TYPE_COLUMNS: &str = "id, name, description, unit, created_at, updated_at";

pub struct FeedTypeService;

impl FeedTypeService {
    #[instrument(skip(db, dto))]
    pub async fn create_feed_type(db: &PgPool, dto: CreateFeedTypeDto) -> Result<FeedType, AppError> {
        let feed_type = sqlx::query_as::<_, FeedType>(&format!(
            r#"INSERT INTO feed_types (name, description, unit)
               VALUES ($1, $2, $3)
               RETURNING {FEED_TYPE_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(&dto.unit)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A feed type with this name already exists"))?;

        Ok(feed_type)
    }

    #[instrument(skip(db))]
    pub async fn get_feed_types(db: &PgPool) -> Result<Vec<FeedType>, AppError> {
        let feed_types = sqlx::query_as::<_, FeedType>(&format!(
            "SELECT {FEED_TYPE_COLUMNS} FROM feed_types ORDER BY name"
        ))
        .fetch_all(db)
        .await?;

        Ok(feed_types)
    }

    #[instrument(skip(db))]
    pub async fn get_feed_type_by_id(db: &PgPool, id: Uuid) -> Result<FeedType, AppError> {
        sqlx::query_as::<_, FeedType>(&format!(
            "SELECT {FEED_TYPE_COLUMNS} FROM feed_types WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Feed type not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_feed_type(
        db: &PgPool,
        id: Uuid,
        dto: UpdateFeedTypeDto,
    ) -> Result<FeedType, AppError> {
        let existing = Self::get_feed_type_by_id(db, id).await?;

        let feed_type = sqlx::query_as::<_, FeedType>(&format!(
            r#"UPDATE feed_types
               SET name = $1, description = $2, unit = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {FEED_TYPE_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.description.or(existing.description))
        .bind(dto.unit.or(existing.unit))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A feed type with this name already exists"))?;

        Ok(feed_type)
    }

    #[instrument(skip(db))]
    pub async fn delete_feed_type(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM feed_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Feed type not found")));
        }

        Ok(())
    }
}
