//! Shared application state for all routes.

use crate::repository::MovieRepository;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
    /// Parent of every request's token; cancelled when the server starts shutting down.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        AppState {
            movies,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }
}
