use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_vaccination_record, delete_vaccination_record, get_vaccination_record_by_id,
    get_vaccination_records, update_vaccination_record,
};

pub fn init_vaccinations_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_vaccination_record).get(get_vaccination_records),
        )
        .route(
            "/{id}",
            get(get_vaccination_record_by_id)
                .put(update_vaccination_record)
                .delete(delete_vaccination_record),
        )
}
