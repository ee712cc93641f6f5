//! JSON response helpers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StatusBody {
    pub status: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

/// Serializes `payload` as the JSON body with `status`. `Json` sets the
/// `application/json` content type; a payload that fails to serialize is a bug
/// and comes out as axum's plain-text 500.
pub fn respond<T: Serialize>(status: StatusCode, payload: T) -> Response {
    (status, Json(payload)).into_response()
}

/// `{"status":"Success"}`
pub fn success() -> StatusBody {
    StatusBody { status: "Success" }
}
