//! Client-side catalog computations: search/genre filtering, the genre
//! index, admin statistics, and genre list text conversion.
//!
//! Everything here is a pure function over a slice of movies, recomputed
//! whenever the inputs change.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::movie::Movie;

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// The search box text plus the selected genre chip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub search: String,
    /// `None` means "All genres".
    pub genre: Option<String>,
}

impl MovieQuery {
    pub fn new(search: impl Into<String>, genre: Option<String>) -> Self {
        Self {
            search: search.into(),
            genre,
        }
    }

    /// A movie matches when its title or description contains the search
    /// text (case-insensitive) and, if a genre is selected, its genre list
    /// contains that exact tag.
    pub fn matches(&self, movie: &Movie) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = movie.title.to_lowercase().contains(&needle)
            || movie.description.to_lowercase().contains(&needle);

        let matches_genre = match self.genre.as_deref() {
            None | Some("") => true,
            Some(genre) => movie.genre.iter().any(|g| g == genre),
        };

        matches_search && matches_genre
    }
}

/// Movies matching `query`, in list order.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &MovieQuery) -> Vec<&'a Movie> {
    movies.iter().filter(|m| query.matches(m)).collect()
}

/// Every distinct genre across `movies`, sorted.
pub fn all_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|m| m.genre.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Admin statistics
// ---------------------------------------------------------------------------

/// Summary figures shown on the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_movies: usize,
    /// Mean over rated movies; `None` when nothing is rated.
    pub average_rating: Option<f64>,
    pub genre_count: usize,
}

pub fn catalog_stats(movies: &[Movie]) -> CatalogStats {
    let ratings: Vec<f64> = movies.iter().filter_map(|m| m.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    CatalogStats {
        total_movies: movies.len(),
        average_rating,
        genre_count: all_genres(movies).len(),
    }
}

// ---------------------------------------------------------------------------
// Genre text
// ---------------------------------------------------------------------------

/// Split a comma-separated genre field ("romance, action") into trimmed,
/// non-empty tags, keeping their order.
pub fn parse_genre_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Inverse of [`parse_genre_list`] for pre-filling an edit form.
pub fn format_genre_list(genres: &[String]) -> String {
    genres.join(", ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
