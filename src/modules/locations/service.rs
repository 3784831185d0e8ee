use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};

use super::model::{CreateLocationDto, Location, UpdateLocationDto};

const LOCATION_COLUMNS: &str = "id, name, description, capacity, created_at, updated_at";

pub struct LocationService;

impl LocationService {
    #[instrument(skip(db, dto))]
    pub async fn create_location(db: &PgPool, dto: CreateLocationDto) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(&format!(
            r#"INSERT INTO locations (name, description, capacity)
               VALUES ($1, $2, $3)
               RETURNING {LOCATION_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(&dto.description)
        .bind(dto.capacity)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A location with this name already exists"))?;

        Ok(location)
    }

    #[instrument(skip(db))]
    pub async fn get_locations(db: &PgPool) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY name"
        ))
        .fetch_all(db)
        .await?;

        Ok(locations)
    }

    #[instrument(skip(db))]
    pub async fn get_location_by_id(db: &PgPool, id: Uuid) -> Result<Location, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Location not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_location(
        db: &PgPool,
        id: Uuid,
        dto: UpdateLocationDto,
    ) -> Result<Location, AppError> {
        let existing = Self::get_location_by_id(db, id).await?;

        let location = sqlx::query_as::<_, Location>(&format!(
            r#"UPDATE locations
               SET name = $1, description = $2, capacity = $3, updated_at = NOW()
               WHERE id = $4
               RETURNING {LOCATION_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.description.or(existing.description))
        .bind(dto.capacity.or(existing.capacity))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A location with this name already exists"))?;

        Ok(location)
    }

    /// Delete a location. Animals referencing it keep their rows; the FK
    /// sets their location to null.
    #[instrument(skip(db))]
    pub async fn delete_location(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Location not found")));
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

    fn dto(name: &str) -> CreateLocationDto {
        CreateLocationDto {
            name: name.to_string(),
            description: None,
            capacity: Some(40),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_and_list(pool: PgPool) {
        LocationService::create_location(&pool, dto("North paddock"))
            .await
            .unwrap();
        LocationService::create_location(&pool, dto("Barn A"))
            .await
            .unwrap();

        let locations = LocationService::get_locations(&pool).await.unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "Barn A");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_name_conflicts(pool: PgPool) {
        LocationService::create_location(&pool, dto("North paddock"))
            .await
            .unwrap();
        let err = LocationService::create_location(&pool, dto("North paddock"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_unlinks_animals(pool: PgPool) {
        let location = LocationService::create_location(&pool, dto("South paddock"))
            .await
            .unwrap();
        let animal = AnimalService::create_animal(
            &pool,
            CreateAnimalDto {
                tag: "L-001".to_string(),
                name: None,
                species: "cattle".to_string(),
                breed: None,
                sex: "female".to_string(),
                date_of_birth: None,
                location_id: Some(location.id),
            },
        )
        .await
        .unwrap();

        LocationService::delete_location(&pool, location.id)
            .await
            .unwrap();

        let animal = AnimalService::get_animal_by_id(&pool, animal.id)
            .await
            .unwrap();
        assert_eq!(animal.location_id, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_missing_not_found(pool: PgPool) {
        let err = LocationService::delete_location(&pool, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
