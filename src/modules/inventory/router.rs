use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_category, create_item, delete_category, delete_item, get_categories,
    get_category_by_id, get_item_by_id, get_items, update_category, update_item,
};

pub fn init_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_item).get(get_items))
        .route(
            "/{id}",
            get(get_item_by_id).put(update_item).delete(delete_item),
        )
}

pub fn init_inventory_categories_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category).get(get_categories))
        .route(
            "/{id}",
            get(get_category_by_id)
                .put(update_category)
                .delete(delete_category),
        )
}
