#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;
use marquee_db::store::{InMemoryMovieStore, MovieStore, StoreError};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        log_json: false,
    }
}

/// Build the full application router over the given store.
pub fn build_app_with_store(store: Arc<dyn MovieStore>) -> Router {
    build_app_router(AppState::new(store), &test_config())
}

/// Build the full application router over a fresh in-memory store.
///
/// Returns the store too so a test can build several routers that share
/// the same records.
pub fn build_test_app() -> (Router, Arc<dyn MovieStore>) {
    let store: Arc<dyn MovieStore> = Arc::new(InMemoryMovieStore::new());
    (build_app_with_store(Arc::clone(&store)), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails, standing in for a lost database
/// connection.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused by db.internal:5432".into())
}

#[async_trait]
impl MovieStore for UnavailableStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn find(&self, _id: DbId) -> Result<Option<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _movie: NewMovie) -> Result<Movie, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _id: DbId, _changes: MovieChanges) -> Result<Option<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

// ---------------------------------------------------------------------------
// Misbehaving store
// ---------------------------------------------------------------------------

/// How [`MisbehavingStore::list`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Misbehavior {
    /// Never completes.
    Hang,
    /// Panics inside the handler.
    Panic,
}

/// A store whose `list` hangs or panics; every other operation reports
/// the store unavailable.
pub struct MisbehavingStore(pub Misbehavior);

#[async_trait]
impl MovieStore for MisbehavingStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        match self.0 {
            Misbehavior::Hang => std::future::pending().await,
            Misbehavior::Panic => panic!("movie list exploded"),
        }
    }

    async fn find(&self, _id: DbId) -> Result<Option<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn create(&self, _movie: NewMovie) -> Result<Movie, StoreError> {
        Err(unavailable())
    }

    async fn update(&self, _id: DbId, _changes: MovieChanges) -> Result<Option<Movie>, StoreError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
