use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_feed_type, delete_feed_type, get_feed_type_by_id, get_feed_types, update_feed_type,
};

pub fn init_feed_types_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_feed_type).get(get_feed_types))
        .route(
            "/{id}",
            get(get_feed_type_by_id)
                .put(update_feed_type)
                .delete(delete_feed_type),
        )
}
