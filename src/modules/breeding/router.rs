use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_breeding_record, delete_breeding_record, get_breeding_record_by_id,
    get_breeding_records, update_breeding_record,
};

pub fn init_breeding_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_breeding_record).get(get_breeding_records))
        .route(
            "/{id}",
            get(get_breeding_record_by_id)
                .put(update_breeding_record)
                .delete(delete_breeding_record),
        )
}
