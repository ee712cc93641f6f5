//! Per-request cancellation context.

use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tokio_util::sync::{CancellationToken, DropGuard};

/// Owns a cancellation token for the lifetime of the handler.
///
/// The token is a child of [`AppState::shutdown`], so a shutdown makes every
/// in-flight storage call return `RepoError::Cancelled`. A client disconnect
/// drops the handler future instead, which aborts the statement directly; the
/// guard then fires the token only so nothing else keeps waiting on it.
pub struct RequestContext {
    cancel: CancellationToken,
    _guard: DropGuard,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::with_token(CancellationToken::new())
    }

    /// Context whose token also fires when `parent` is cancelled.
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self::with_token(parent.child_token())
    }

    fn with_token(cancel: CancellationToken) -> Self {
        let _guard = cancel.clone().drop_guard();
        RequestContext { cancel, _guard }
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        Ok(RequestContext::child_of(&app.shutdown))
    }
}
