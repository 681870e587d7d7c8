//! Row mapping for the `movies` table.

use marquee_core::movie::Movie;
use marquee_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub genre: Vec<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub description: String,
    pub download_url: Option<String>,
    pub poster: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            title: row.title,
            genre: row.genre,
            year: row.year,
            rating: row.rating,
            description: row.description,
            download_url: row.download_url,
            poster: row.poster,
            duration: row.duration,
            size: row.size,
            quality: row.quality,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
