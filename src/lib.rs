//! Movie API: JSON CRUD over a single PostgreSQL-backed movie table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError, RepoError};
pub use model::{Movie, MoviePayload};
pub use repository::{with_cancel, MovieRepository, PgMovieRepository};
pub use routes::app;
pub use state::AppState;
