use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_medication, delete_medication, get_medication_by_id, get_medications, update_medication,
};

pub fn init_medications_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_medication).get(get_medications))
        .route(
            "/{id}",
            get(get_medication_by_id)
                .put(update_medication)
                .delete(delete_medication),
        )
}
