//! Router assembly.

mod common;
mod movie;

pub use common::common_routes;
pub use movie::movie_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Upper bound on request bodies, enforced by the `Bytes` extractor.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application: common and movie routes behind tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(movie_routes(state))
        .layer(middleware)
}
