use async_trait::async_trait;
use chrono::Utc;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;
use tokio::sync::RwLock;

use super::{MovieStore, StoreError};

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    movies: Vec<Movie>,
}

/// [`MovieStore`] kept entirely in process memory.
///
/// IDs start at 1 and are never reused, so a deleted movie's ID keeps
/// reporting not-found. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                movies: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.inner.read().await.movies.clone())
    }

    async fn find(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let movie = movie.into_movie(id, Utc::now());
        inner.movies.push(movie.clone());
        tracing::debug!(movie_id = id, "Stored movie in memory");
        Ok(movie)
    }

    async fn update(&self, id: DbId, changes: MovieChanges) -> Result<Option<Movie>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(movie) = inner.movies.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        changes.apply_to(movie, Utc::now());
        Ok(Some(movie.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.movies.len();
        inner.movies.retain(|m| m.id != id);
        Ok(inner.movies.len() < before)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
