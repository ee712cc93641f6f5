//! Movie CRUD routes.

use crate::handlers::{create, delete as delete_handler, list, update};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route("/movie", get(list))
        .route("/movie/create", post(create))
        .route("/movie/:id/update", put(update))
        .route("/movie/:id/delete", delete(delete_handler))
        .with_state(state)
}
