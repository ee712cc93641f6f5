//! Operational routes: liveness, readiness against storage, build metadata.

use crate::response::{respond, StatusBody};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

/// Never touches storage.
async fn liveness() -> Response {
    respond(StatusCode::OK, StatusBody { status: "ok" })
}

async fn readiness(State(state): State<AppState>) -> Response {
    match state.movies.ping().await {
        Ok(()) => respond(
            StatusCode::OK,
            ReadyBody {
                status: "ok",
                database: "ok",
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            respond(
                StatusCode::SERVICE_UNAVAILABLE,
                ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                },
            )
        }
    }
}

async fn build_info() -> Response {
    respond(
        StatusCode::OK,
        VersionBody {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
