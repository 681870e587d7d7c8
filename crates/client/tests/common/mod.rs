#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_client::api::MovieApi;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;
use marquee_db::store::{InMemoryMovieStore, MovieStore, StoreError};

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        log_json: false,
    }
}

/// Serve the real router over `store` on an ephemeral local port and
/// return a client pointed at it.
pub async fn spawn_server(store: Arc<dyn MovieStore>) -> MovieApi {
    let app = build_app_router(AppState::new(store), &test_config());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MovieApi::new(format!("http://{addr}"))
}

/// Serve over a fresh in-memory store.
pub async fn spawn_in_memory() -> (MovieApi, Arc<dyn MovieStore>) {
    let store: Arc<dyn MovieStore> = Arc::new(InMemoryMovieStore::new());
    (spawn_server(Arc::clone(&store)).await, store)
}

pub fn new_movie(title: &str, genre: &[&str]) -> NewMovie {
    NewMovie {
        title: title.into(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        ..Default::default()
    }
}

/// In-memory store that can be switched into a failing state.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryMovieStore,
    failing: AtomicBool,
}

impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MovieStore for FlakyStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        self.check()?;
        self.inner.list().await
    }

    async fn find(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        self.check()?;
        self.inner.find(id).await
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        self.check()?;
        self.inner.create(movie).await
    }

    async fn update(&self, id: DbId, changes: MovieChanges) -> Result<Option<Movie>, StoreError> {
        self.check()?;
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.check()?;
        self.inner.delete(id).await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.check()
    }
}
