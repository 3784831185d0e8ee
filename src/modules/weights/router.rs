use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_weight_record, delete_weight_record, get_weight_record_by_id, get_weight_records,
    update_weight_record,
};

pub fn init_weights_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_weight_record).get(get_weight_records))
        .route(
            "/{id}",
            get(get_weight_record_by_id)
                .put(update_weight_record)
                .delete(delete_weight_record),
        )
}
