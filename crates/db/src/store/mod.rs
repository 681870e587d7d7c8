//! The record store abstraction the HTTP layer is written against.

mod memory;
mod postgres;

use async_trait::async_trait;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;

pub use memory::InMemoryMovieStore;
pub use postgres::PgMovieStore;

/// Failure talking to the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// A collection of movie records keyed by a store-assigned ID.
///
/// Every operation touches a single record; there are no multi-record
/// transactions. Concurrent writers are last-write-wins.
#[async_trait]
pub trait MovieStore: Send + Sync + 'static {
    /// All movies in creation order.
    async fn list(&self) -> Result<Vec<Movie>, StoreError>;

    /// A single movie, or `None` if the ID is unknown.
    async fn find(&self, id: DbId) -> Result<Option<Movie>, StoreError>;

    /// Store a new movie and return it with its assigned ID.
    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError>;

    /// Replace the provided fields on an existing movie.
    ///
    /// Returns `None` without creating anything when the ID is unknown.
    async fn update(&self, id: DbId, changes: MovieChanges) -> Result<Option<Movie>, StoreError>;

    /// Remove a movie. Returns `true` if it existed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Confirm the store can serve requests.
    async fn health_check(&self) -> Result<(), StoreError>;
}
