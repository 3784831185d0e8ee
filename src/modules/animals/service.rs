use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};
use crate::utils::pagination::PaginationMeta;

use super::model::{
    Animal, AnimalFilterParams, CreateAnimalDto, PaginatedAnimalsResponse, UpdateAnimalDto,
};

const ANIMAL_COLUMNS: &str = "id, tag, name, species, breed, sex, status, date_of_birth, \
     location_id, current_weight, current_weight_date, created_at, updated_at";

pub struct AnimalService;

impl AnimalService {
    #[instrument(skip(db, dto))]
    pub async fn create_animal(db: &PgPool, dto: CreateAnimalDto) -> Result<Animal, AppError> {
        let animal = sqlx::query_as::<_, Animal>(&format!(
            r#"INSERT INTO animals (tag, name, species, breed, sex, date_of_birth, location_id)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {ANIMAL_COLUMNS}"#
        ))
        .bind(dto.tag.trim())
        .bind(&dto.name)
        .bind(dto.species.trim())
        .bind(&dto.breed)
        .bind(dto.sex.trim())
        .bind(dto.date_of_birth)
        .bind(dto.location_id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "An animal with this tag already exists"))?;

        Ok(animal)
    }

    #[instrument(skip(db))]
    pub async fn get_animals(
        db: &PgPool,
        filters: AnimalFilterParams,
    ) -> Result<PaginatedAnimalsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();

        let mut where_clause = String::from(" WHERE TRUE");
        if filters.species.is_some() {
            where_clause.push_str(" AND species = $1");
        }
        if filters.status.is_some() {
            where_clause.push_str(&format!(
                " AND status = ${}",
                if filters.species.is_some() { 2 } else { 1 }
            ));
        }
        if filters.location_id.is_some() {
            let n = 1 + filters.species.is_some() as usize + filters.status.is_some() as usize;
            where_clause.push_str(&format!(" AND location_id = ${}", n));
        }

        let count_query = format!("SELECT COUNT(*) FROM animals{where_clause}");
        let mut count_sql = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(species) = &filters.species {
            count_sql = count_sql.bind(species);
        }
        if let Some(status) = &filters.status {
            count_sql = count_sql.bind(status);
        }
        if let Some(location_id) = filters.location_id {
            count_sql = count_sql.bind(location_id);
        }
        let total = count_sql.fetch_one(db).await?;

        let data_query = format!(
            "SELECT {ANIMAL_COLUMNS} FROM animals{where_clause} \
             ORDER BY created_at DESC LIMIT {limit} OFFSET {offset}"
        );
        let mut data_sql = sqlx::query_as::<_, Animal>(&data_query);
        if let Some(species) = &filters.species {
            data_sql = data_sql.bind(species);
        }
        if let Some(status) = &filters.status {
            data_sql = data_sql.bind(status);
        }
        if let Some(location_id) = filters.location_id {
            data_sql = data_sql.bind(location_id);
        }
        let animals = data_sql.fetch_all(db).await?;

        Ok(PaginatedAnimalsResponse {
            data: animals,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_animal_by_id(db: &PgPool, id: Uuid) -> Result<Animal, AppError> {
        sqlx::query_as::<_, Animal>(&format!(
            "SELECT {ANIMAL_COLUMNS} FROM animals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Animal not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_animal(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAnimalDto,
    ) -> Result<Animal, AppError> {
        let existing = Self::get_animal_by_id(db, id).await?;

        let animal = sqlx::query_as::<_, Animal>(&format!(
            r#"UPDATE animals
               SET tag = $1, name = $2, species = $3, breed = $4, sex = $5, status = $6,
                   date_of_birth = $7, location_id = $8, updated_at = NOW()
               WHERE id = $9
               RETURNING {ANIMAL_COLUMNS}"#
        ))
        .bind(dto.tag.map(|t| t.trim().to_string()).unwrap_or(existing.tag))
        .bind(dto.name.or(existing.name))
        .bind(dto.species.unwrap_or(existing.species))
        .bind(dto.breed.or(existing.breed))
        .bind(dto.sex.unwrap_or(existing.sex))
        .bind(dto.status.unwrap_or(existing.status))
        .bind(dto.date_of_birth.or(existing.date_of_birth))
        .bind(dto.location_id.or(existing.location_id))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "An animal with this tag already exists"))?;

        Ok(animal)
    }

    #[instrument(skip(db))]
    pub async fn delete_animal(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM animals WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Animal not found")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn create_dto(tag: &str) -> CreateAnimalDto {
        CreateAnimalDto {
            tag: tag.to_string(),
            name: Some("Bessie".to_string()),
            species: "cattle".to_string(),
            breed: Some("Holstein".to_string()),
            sex: "female".to_string(),
            date_of_birth: None,
            location_id: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_animal(pool: PgPool) {
        let animal = AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap();
        assert_eq!(animal.tag, "A-001");
        assert_eq!(animal.status, "active");
        assert!(animal.current_weight.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_animal_duplicate_tag_conflicts(pool: PgPool) {
        AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap();
        let err = AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_animals_filtered_by_species(pool: PgPool) {
        AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap();
        let mut goat = create_dto("G-001");
        goat.species = "goat".to_string();
        AnimalService::create_animal(&pool, goat).await.unwrap();

        let filters = AnimalFilterParams {
            species: Some("goat".to_string()),
            status: None,
            location_id: None,
            pagination: Default::default(),
        };
        let response = AnimalService::get_animals(&pool, filters).await.unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].tag, "G-001");
        assert_eq!(response.meta.total, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_animal_not_found(pool: PgPool) {
        let err = AnimalService::get_animal_by_id(&pool, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_animal_partial(pool: PgPool) {
        let created = AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap();

        let dto = UpdateAnimalDto {
            tag: None,
            name: None,
            species: None,
            breed: None,
            sex: None,
            status: Some("sold".to_string()),
            date_of_birth: None,
            location_id: None,
        };
        let updated = AnimalService::update_animal(&pool, created.id, dto)
            .await
            .unwrap();
        assert_eq!(updated.status, "sold");
        assert_eq!(updated.tag, "A-001");
        assert_eq!(updated.name, Some("Bessie".to_string()));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_animal_then_repeat_is_not_found(pool: PgPool) {
        let created = AnimalService::create_animal(&pool, create_dto("A-001"))
            .await
            .unwrap();

        AnimalService::delete_animal(&pool, created.id)
            .await
            .unwrap();
        let err = AnimalService::delete_animal(&pool, created.id)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
