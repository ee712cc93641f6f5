//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::{respond, ErrorBody};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures surfaced by a [`crate::repository::MovieRepository`].
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
    #[error("write failed: {0}")]
    Write(#[source] sqlx::Error),
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Use Content-Type - application/json")]
    ContentType,
    #[error("invalid body: {0}")]
    Decode(String),
    #[error("invalid id: '{0}'")]
    InvalidId(String),
    /// An axum extractor gave up before the handler ran (oversized body, undecodable path).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ContentType | AppError::Decode(_) | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Rejected { status, .. } => *status,
            AppError::Repo(RepoError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_) | AppError::Repo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(r: BytesRejection) -> Self {
        AppError::Rejected {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(r: PathRejection) -> Self {
        AppError::Rejected {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        respond(status, ErrorBody::new(self.to_string()))
    }
}
