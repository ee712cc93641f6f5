//! PostgreSQL pool setup and liveness check.

use crate::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

fn connect_options(cfg: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    match &cfg.url {
        Some(url) => PgConnectOptions::from_str(url),
        None => Ok(PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name)),
    }
}

/// Opens the pool and pings it. An error here means the service must not start.
pub async fn connect(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(cfg)?;
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;
    ping(&pool).await?;
    tracing::info!(
        max_connections = cfg.max_connections,
        schema = %cfg.schema,
        "database connection established"
    );
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}

/// Schema-qualified name of the movie table. `schema` is a plain identifier (checked when
/// the config is read) and is left unquoted so it folds case like the DDL in `sql/movie.sql`.
pub fn movie_table(schema: &str) -> String {
    format!("{schema}.movie")
}
