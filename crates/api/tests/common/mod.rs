#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movies_core::error::StoreError;
use movies_core::movie::{Movie, MovieFields};
use movies_core::store::memory::InMemoryMovieStore;
use movies_core::store::{DeleteOutcome, InsertOutcome, MovieStore, UpdateOutcome};
use movies_core::types::MovieId;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_timeout_secs: 10,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn MovieStore>) -> Router {
    build_test_app_with(store, test_config())
}

/// Build the full application router with a custom config.
pub fn build_test_app_with(store: Arc<dyn MovieStore>, config: ServerConfig) -> Router {
    build_app_router(AppState::new(store, config.clone()), &config)
}

/// Router over an in-memory store, returning the store for inspection.
pub fn memory_app() -> (Router, Arc<InMemoryMovieStore>) {
    let store = Arc::new(InMemoryMovieStore::new());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send an arbitrary (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Misbehaving stores
// ---------------------------------------------------------------------------

/// A store whose every call fails with a backend error.
pub struct FailingStore;

fn refused() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

#[async_trait]
impl MovieStore for FailingStore {
    async fn find_all(&self, _limit: i64) -> Result<Vec<Movie>, StoreError> {
        Err(refused())
    }

    async fn find_by_title(&self, _title: &str) -> Result<Movie, StoreError> {
        Err(refused())
    }

    async fn find_by_id(&self, _id: MovieId) -> Result<Movie, StoreError> {
        Err(refused())
    }

    async fn insert(&self, _movie: &Movie) -> Result<InsertOutcome, StoreError> {
        Err(refused())
    }

    async fn update(&self, _id: MovieId, _fields: &MovieFields) -> Result<UpdateOutcome, StoreError> {
        Err(refused())
    }

    async fn delete(&self, _id: MovieId) -> Result<DeleteOutcome, StoreError> {
        Err(refused())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(refused())
    }
}

/// A store that never answers.
pub struct StallingStore;

#[async_trait]
impl MovieStore for StallingStore {
    async fn find_all(&self, _limit: i64) -> Result<Vec<Movie>, StoreError> {
        std::future::pending().await
    }

    async fn find_by_title(&self, _title: &str) -> Result<Movie, StoreError> {
        std::future::pending().await
    }

    async fn find_by_id(&self, _id: MovieId) -> Result<Movie, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _movie: &Movie) -> Result<InsertOutcome, StoreError> {
        std::future::pending().await
    }

    async fn update(&self, _id: MovieId, _fields: &MovieFields) -> Result<UpdateOutcome, StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _id: MovieId) -> Result<DeleteOutcome, StoreError> {
        std::future::pending().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        std::future::pending().await
    }
}

/// A store that panics on every call.
pub struct PanickingStore;

#[async_trait]
impl MovieStore for PanickingStore {
    async fn find_all(&self, _limit: i64) -> Result<Vec<Movie>, StoreError> {
        panic!("find_all exploded")
    }

    async fn find_by_title(&self, _title: &str) -> Result<Movie, StoreError> {
        panic!("find_by_title exploded")
    }

    async fn find_by_id(&self, _id: MovieId) -> Result<Movie, StoreError> {
        panic!("find_by_id exploded")
    }

    async fn insert(&self, _movie: &Movie) -> Result<InsertOutcome, StoreError> {
        panic!("insert exploded")
    }

    async fn update(&self, _id: MovieId, _fields: &MovieFields) -> Result<UpdateOutcome, StoreError> {
        panic!("update exploded")
    }

    async fn delete(&self, _id: MovieId) -> Result<DeleteOutcome, StoreError> {
        panic!("delete exploded")
    }

    async fn ping(&self) -> Result<(), StoreError> {
        panic!("ping exploded")
    }
}
