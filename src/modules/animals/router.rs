use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_animal, delete_animal, get_animal_by_id, get_animals, update_animal,
};

pub fn init_animals_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_animal).get(get_animals))
        .route(
            "/{id}",
            get(get_animal_by_id)
                .put(update_animal)
                .delete(delete_animal),
        )
}
