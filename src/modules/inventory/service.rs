use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::{AppError, map_unique_violation};

use super::model::{
    CreateInventoryCategoryDto, CreateInventoryItemDto, InventoryCategory, InventoryFilterParams,
    InventoryItem, UpdateInventoryCategoryDto, UpdateInventoryItemDto,
};

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";
const ITEM_COLUMNS: &str =
    "id, name, category_id, quantity, unit, reorder_level, created_at, updated_at";

pub struct InventoryService;

impl InventoryService {
    #[instrument(skip(db, dto))]
    pub async fn create_category(
        db: &PgPool,
        dto: CreateInventoryCategoryDto,
    ) -> Result<InventoryCategory, AppError> {
        let category = sqlx::query_as::<_, InventoryCategory>(&format!(
            r#"INSERT INTO inventory_categories (name, description)
               VALUES ($1, $2)
               RETURNING {CATEGORY_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A category with this name already exists"))?;

        Ok(category)
    }

    #[instrument(skip(db))]
    pub async fn get_categories(db: &PgPool) -> Result<Vec<InventoryCategory>, AppError> {
        let categories = sqlx::query_as::<_, InventoryCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM inventory_categories ORDER BY name"
        ))
        .fetch_all(db)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(db))]
    pub async fn get_category_by_id(db: &PgPool, id: Uuid) -> Result<InventoryCategory, AppError> {
        sqlx::query_as::<_, InventoryCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM inventory_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Category not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_category(
        db: &PgPool,
        id: Uuid,
        dto: UpdateInventoryCategoryDto,
    ) -> Result<InventoryCategory, AppError> {
        let existing = Self::get_category_by_id(db, id).await?;

        let category = sqlx::query_as::<_, InventoryCategory>(&format!(
            r#"UPDATE inventory_categories
               SET name = $1, description = $2, updated_at = NOW()
               WHERE id = $3
               RETURNING {CATEGORY_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.description.or(existing.description))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| map_unique_violation(e, "A category with this name already exists"))?;

        Ok(category)
    }

    /// Delete a category. Items in it are kept and become uncategorized.
    #[instrument(skip(db))]
    pub async fn delete_category(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM inventory_categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Category not found")));
        }

        Ok(())
    }

    #[instrument(skip(db, dto))]
    pub async fn create_item(
        db: &PgPool,
        dto: CreateInventoryItemDto,
    ) -> Result<InventoryItem, AppError> {
        if let Some(category_id) = dto.category_id {
            Self::get_category_by_id(db, category_id).await?;
        }

        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"INSERT INTO inventory_items (name, category_id, quantity, unit, reorder_level)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(dto.name.trim())
        .bind(dto.category_id)
        .bind(dto.quantity.unwrap_or(0.0))
        .bind(&dto.unit)
        .bind(dto.reorder_level)
        .fetch_one(db)
        .await
        .map_err(|e| {
            map_unique_violation(e, "An item with this name already exists in this category")
        })?;

        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn get_items(
        db: &PgPool,
        filters: InventoryFilterParams,
    ) -> Result<Vec<InventoryItem>, AppError> {
        let items = if let Some(category_id) = filters.category_id {
            sqlx::query_as::<_, InventoryItem>(&format!(
                "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE category_id = $1 ORDER BY name"
            ))
            .bind(category_id)
            .fetch_all(db)
            .await?
        } else {
            sqlx::query_as::<_, InventoryItem>(&format!(
                "SELECT {ITEM_COLUMNS} FROM inventory_items ORDER BY name"
            ))
            .fetch_all(db)
            .await?
        };

        Ok(items)
    }

    #[instrument(skip(db))]
    pub async fn get_item_by_id(db: &PgPool, id: Uuid) -> Result<InventoryItem, AppError> {
        sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Inventory item not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update_item(
        db: &PgPool,
        id: Uuid,
        dto: UpdateInventoryItemDto,
    ) -> Result<InventoryItem, AppError> {
        let existing = Self::get_item_by_id(db, id).await?;

        if let Some(category_id) = dto.category_id {
            Self::get_category_by_id(db, category_id).await?;
        }

        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"UPDATE inventory_items
               SET name = $1, category_id = $2, quantity = $3, unit = $4, reorder_level = $5,
                   updated_at = NOW()
               WHERE id = $6
               RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(
            dto.name
                .map(|n| n.trim().to_string())
                .unwrap_or(existing.name),
        )
        .bind(dto.category_id.or(existing.category_id))
        .bind(dto.quantity.unwrap_or(existing.quantity))
        .bind(dto.unit.or(existing.unit))
        .bind(dto.reorder_level.or(existing.reorder_level))
        .bind(id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            map_unique_violation(e, "An item with this name already exists in this category")
        })?;

        Ok(item)
    }

    #[instrument(skip(db))]
    pub async fn delete_item(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Inventory item not found"
            )));
        }

        Ok(())
    }
}
