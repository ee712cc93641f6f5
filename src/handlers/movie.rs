//! Movie handlers: list, create, update, delete.

use crate::error::AppError;
use crate::extractors::RequestContext;
use crate::model::MoviePayload;
use crate::response::{respond, success};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Response,
};

/// Accepts `application/json` with optional parameters (`; charset=utf-8`).
fn require_json(headers: &HeaderMap) -> Result<(), AppError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|media| media.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false);
    if is_json {
        Ok(())
    } else {
        Err(AppError::ContentType)
    }
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::InvalidId(id_str.to_string()))
}

fn decode_payload(body: &[u8]) -> Result<MoviePayload, AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// GET /movie
pub async fn list(State(state): State<AppState>, ctx: RequestContext) -> Result<Response, AppError> {
    let movies = state.movies.fetch_all(ctx.cancel_token()).await?;
    Ok(respond(StatusCode::OK, movies))
}

// Extractor results are taken as `Result` so their rejections render as JSON errors too.

/// POST /movie/create
pub async fn create(
    State(state): State<AppState>,
    ctx: RequestContext,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    require_json(&headers)?;
    let movie = decode_payload(&body?)?;
    state.movies.insert(ctx.cancel_token(), &movie).await?;
    tracing::info!(title = %movie.title, "movie created");
    Ok(respond(StatusCode::CREATED, success()))
}

/// PUT /movie/:id/update. Replies 201, not 200, for compatibility with existing clients.
pub async fn update(
    State(state): State<AppState>,
    ctx: RequestContext,
    path: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    require_json(&headers)?;
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    let movie = decode_payload(&body?)?;
    state.movies.update_by_id(ctx.cancel_token(), &movie, id).await?;
    tracing::info!(id, "movie updated");
    Ok(respond(StatusCode::CREATED, success()))
}

/// DELETE /movie/:id/delete
pub async fn delete(
    State(state): State<AppState>,
    ctx: RequestContext,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    state.movies.delete_by_id(ctx.cancel_token(), id).await?;
    tracing::info!(id, "movie deleted");
    Ok(respond(StatusCode::OK, success()))
}
