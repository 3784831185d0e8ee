//! In-process domain event dispatch.
//!
//! The only event today is [`WeightRecorded`]: after a weight record is
//! persisted, the owning animal's denormalized `current_weight` and
//! `current_weight_date` are recomputed from the latest record. The
//! recomputation runs in a spawned task; its failure is logged and swallowed
//! so the primary write's response path is never affected.

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Emitted after a weight record for `animal_id` has been committed.
#[derive(Debug, Clone, Copy)]
pub struct WeightRecorded {
    pub animal_id: Uuid,
}

/// Fire-and-forget dispatch. Returns the spawned task handle so tests can
/// await completion; the request path drops it.
pub fn dispatch_weight_recorded(db: PgPool, event: WeightRecorded) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = sync_current_weight(&db, event.animal_id).await {
            warn!(
                animal_id = %event.animal_id,
                error = %e.error,
                "failed to sync denormalized weight"
            );
        }
    })
}

/// Recompute the animal's denormalized weight fields from the latest weight
/// record, ordered by recorded date with ties broken by insertion order.
/// When the animal has no records left, both fields are cleared: the row
/// assignment sets them to NULL on an empty sub-select.
pub async fn sync_current_weight(db: &PgPool, animal_id: Uuid) -> Result<(), AppError> {
    sqlx::query(
        r#"UPDATE animals
           SET (current_weight, current_weight_date) = (
               SELECT weight, recorded_on
               FROM weight_records
               WHERE animal_id = $1
               ORDER BY recorded_on DESC, created_at DESC
               LIMIT 1
           ),
           updated_at = NOW()
           WHERE id = $1"#,
    )
    .bind(animal_id)
    .execute(db)
    .await?;

    Ok(())
}
