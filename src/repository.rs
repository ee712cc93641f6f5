//! Movie persistence: the repository seam used by handlers and its PostgreSQL implementation.

use crate::error::RepoError;
use crate::model::{Movie, MoviePayload};
use crate::store::movie_table;
use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Storage operations for movies. Every call gives up with [`RepoError::Cancelled`]
/// once `cancel` fires.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// All rows, in whatever order storage returns them.
    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Movie>, RepoError>;

    async fn insert(&self, cancel: &CancellationToken, movie: &MoviePayload) -> Result<(), RepoError>;

    /// Does not check that `id` exists; zero affected rows is still `Ok`.
    async fn update_by_id(
        &self,
        cancel: &CancellationToken,
        movie: &MoviePayload,
        id: i64,
    ) -> Result<(), RepoError>;

    /// Same no-existence-check behavior as `update_by_id`.
    async fn delete_by_id(&self, cancel: &CancellationToken, id: i64) -> Result<(), RepoError>;

    /// Storage liveness, used by the readiness route.
    async fn ping(&self) -> Result<(), RepoError>;
}

/// Runs `op` unless `cancel` fires first; a cancelled token wins even if `op` is ready.
/// Dropping `op` aborts the in-flight statement.
pub async fn with_cancel<T, F>(cancel: &CancellationToken, op: F) -> Result<T, RepoError>
where
    F: Future<Output = Result<T, RepoError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(RepoError::Cancelled),
        res = op => res,
    }
}

pub struct PgMovieRepository {
    pool: PgPool,
    table: String,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgMovieRepository {
            pool,
            table: movie_table(schema),
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Movie>, RepoError> {
        let sql = format!(
            "SELECT id, title, year, created_at, updated_at FROM {}",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        with_cancel(cancel, async {
            sqlx::query_as::<_, Movie>(&sql)
                .fetch_all(&self.pool)
                .await
                .map_err(RepoError::Query)
        })
        .await
    }

    async fn insert(&self, cancel: &CancellationToken, movie: &MoviePayload) -> Result<(), RepoError> {
        let sql = format!("INSERT INTO {} (title, year) VALUES ($1, $2)", self.table);
        tracing::debug!(sql = %sql, title = %movie.title, "query");
        with_cancel(cancel, async {
            sqlx::query(&sql)
                .bind(&movie.title)
                .bind(movie.year)
                .execute(&self.pool)
                .await
                .map_err(RepoError::Write)
        })
        .await?;
        Ok(())
    }

    async fn update_by_id(
        &self,
        cancel: &CancellationToken,
        movie: &MoviePayload,
        id: i64,
    ) -> Result<(), RepoError> {
        let sql = format!(
            "UPDATE {} SET title = $1, year = $2, updated_at = NOW() WHERE id = $3",
            self.table
        );
        tracing::debug!(sql = %sql, id, "query");
        let result = with_cancel(cancel, async {
            sqlx::query(&sql)
                .bind(&movie.title)
                .bind(movie.year)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(RepoError::Write)
        })
        .await?;
        tracing::debug!(id, rows = result.rows_affected(), "movie updated");
        Ok(())
    }

    async fn delete_by_id(&self, cancel: &CancellationToken, id: i64) -> Result<(), RepoError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let result = with_cancel(cancel, async {
            sqlx::query(&sql)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(RepoError::Write)
        })
        .await?;
        tracing::debug!(id, rows = result.rows_affected(), "movie deleted");
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepoError> {
        crate::store::ping(&self.pool).await.map_err(RepoError::Query)
    }
}
