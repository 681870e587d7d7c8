use async_trait::async_trait;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;

use super::{MovieStore, StoreError};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// [`MovieStore`] backed by the `movies` table.
#[derive(Debug, Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = MovieRepo::list(&self.pool).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        let row = MovieRepo::find_by_id(&self.pool, id).await?;
        Ok(row.map(Movie::from))
    }

    async fn create(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let row = MovieRepo::create(&self.pool, &movie).await?;
        Ok(row.into())
    }

    async fn update(&self, id: DbId, changes: MovieChanges) -> Result<Option<Movie>, StoreError> {
        let row = MovieRepo::update(&self.pool, id, &changes).await?;
        Ok(row.map(Movie::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(MovieRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::Unavailable(
                "database connection pool is closed".into(),
            ));
        }
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
