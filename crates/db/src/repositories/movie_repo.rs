//! Repository for the `movies` table.

use marquee_core::movie::{MovieChanges, NewMovie};
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list for `movies` queries.
const COLUMNS: &str = "\
    id, title, genre, year, rating, description, download_url, \
    poster, duration, size, quality, created_at, updated_at";

/// Provides data access for movie records.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie, returning the stored row with its new ID.
    pub async fn create(pool: &PgPool, dto: &NewMovie) -> Result<MovieRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies \
                 (title, genre, year, rating, description, download_url, \
                  poster, duration, size, quality) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(&dto.title)
            .bind(&dto.genre)
            .bind(dto.year)
            .bind(dto.rating)
            .bind(&dto.description)
            .bind(&dto.download_url)
            .bind(&dto.poster)
            .bind(&dto.duration)
            .bind(&dto.size)
            .bind(&dto.quality)
            .fetch_one(pool)
            .await
    }

    /// Partially update a movie.
    ///
    /// `title`, `genre` and `description` use `COALESCE` so only provided
    /// values are written. Nullable columns take a presence flag so an
    /// explicit clear (`Some(None)`) writes `NULL` while an absent field
    /// keeps the stored value. Returns `None` when no row has the given ID;
    /// nothing is inserted in that case.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &MovieChanges,
    ) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title        = COALESCE($2, title), \
                 genre        = COALESCE($3, genre), \
                 description  = COALESCE($4, description), \
                 year         = CASE WHEN $5 THEN $6 ELSE year END, \
                 rating       = CASE WHEN $7 THEN $8 ELSE rating END, \
                 download_url = CASE WHEN $9 THEN $10 ELSE download_url END, \
                 poster       = CASE WHEN $11 THEN $12 ELSE poster END, \
                 duration     = CASE WHEN $13 THEN $14 ELSE duration END, \
                 size         = CASE WHEN $15 THEN $16 ELSE size END, \
                 quality      = CASE WHEN $17 THEN $18 ELSE quality END, \
                 updated_at   = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.genre)
            .bind(&dto.description)
            .bind(dto.year.is_some())
            .bind(dto.year.flatten())
            .bind(dto.rating.is_some())
            .bind(dto.rating.flatten())
            .bind(dto.download_url.is_some())
            .bind(nullable_text(&dto.download_url))
            .bind(dto.poster.is_some())
            .bind(nullable_text(&dto.poster))
            .bind(dto.duration.is_some())
            .bind(nullable_text(&dto.duration))
            .bind(dto.size.is_some())
            .bind(nullable_text(&dto.size))
            .bind(dto.quality.is_some())
            .bind(nullable_text(&dto.quality))
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Inner value of a nullable text change, `None` when absent or cleared.
fn nullable_text(value: &Option<Option<String>>) -> Option<&str> {
    value.as_ref().and_then(|v| v.as_deref())
}
