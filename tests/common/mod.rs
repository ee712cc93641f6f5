#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use movie_api::{app, with_cancel, AppState, Movie, MoviePayload, MovieRepository, RepoError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

/// In-memory stand-in for the PostgreSQL repository. Ids are assigned
/// sequentially; `fail` makes every call return a storage error.
#[derive(Default)]
pub struct MemoryRepo {
    rows: Mutex<BTreeMap<i64, Movie>>,
    next_id: Mutex<i64>,
    pub fail: AtomicBool,
}

impl MemoryRepo {
    pub fn rows(&self) -> Vec<Movie> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    pub fn seed(&self, title: &str, year: Option<i32>) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let now = Utc::now();
        self.rows.lock().unwrap().insert(
            *next,
            Movie {
                id: *next,
                title: title.to_string(),
                year,
                created_at: now,
                updated_at: now,
            },
        );
        *next
    }

    fn check(&self) -> Result<(), RepoError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(RepoError::Write(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MovieRepository for MemoryRepo {
    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Movie>, RepoError> {
        with_cancel(cancel, async {
            if self.fail.load(Ordering::SeqCst) {
                return Err(RepoError::Query(sqlx::Error::PoolClosed));
            }
            Ok(self.rows())
        })
        .await
    }

    async fn insert(&self, cancel: &CancellationToken, movie: &MoviePayload) -> Result<(), RepoError> {
        with_cancel(cancel, async {
            self.check()?;
            self.seed(&movie.title, movie.year);
            Ok::<_, RepoError>(())
        })
        .await
    }

    async fn update_by_id(
        &self,
        cancel: &CancellationToken,
        movie: &MoviePayload,
        id: i64,
    ) -> Result<(), RepoError> {
        with_cancel(cancel, async {
            self.check()?;
            if let Some(row) = self.rows.lock().unwrap().get_mut(&id) {
                row.title = movie.title.clone();
                row.year = movie.year;
                row.updated_at = Utc::now();
            }
            Ok::<_, RepoError>(())
        })
        .await
    }

    async fn delete_by_id(&self, cancel: &CancellationToken, id: i64) -> Result<(), RepoError> {
        with_cancel(cancel, async {
            self.check()?;
            self.rows.lock().unwrap().remove(&id);
            Ok::<_, RepoError>(())
        })
        .await
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.check()
    }
}

pub fn build_test_app(repo: Arc<MemoryRepo>) -> Router {
    app(AppState::new(repo))
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let (status, _, json) = send_request(app, request).await;
    (status, json)
}

/// Sends a prebuilt request; returns status, `Content-Type` (empty if absent) and the
/// body parsed as JSON (`Null` when empty).
pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, String, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, content_type, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, "").await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some("application/json"), body).await
}

pub async fn put_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some("application/json"), body).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None, "").await
}
