use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_service, delete_service, get_service_by_id, get_services, update_service,
};

pub fn init_services_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_service).get(get_services))
        .route(
            "/{id}",
            get(get_service_by_id)
                .put(update_service)
                .delete(delete_service),
        )
}
