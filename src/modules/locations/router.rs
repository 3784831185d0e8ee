use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_location, delete_location, get_location_by_id, get_locations, update_location,
};

pub fn init_locations_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_location).get(get_locations))
        .route(
            "/{id}",
            get(get_location_by_id)
                .put(update_location)
                .delete(delete_location),
        )
}
