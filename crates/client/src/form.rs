//! Editable draft behind the admin "Add Movie" / "Edit" form.
//!
//! Every field is held as text the way it was typed; conversion into a
//! request payload parses the numeric fields and runs domain validation.

use marquee_core::catalog::{format_genre_list, parse_genre_list};
use marquee_core::error::CoreError;
use marquee_core::movie::{Movie, MovieChanges, NewMovie};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    pub title: String,
    pub genres: Vec<String>,
    pub year: String,
    pub rating: String,
    pub description: String,
    pub download_url: String,
    pub poster: String,
    pub duration: String,
    pub size: String,
    pub quality: String,
}

impl MovieForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from an existing movie for editing.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genres: movie.genre.clone(),
            year: movie.year.map(|y| y.to_string()).unwrap_or_default(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
            description: movie.description.clone(),
            download_url: movie.download_url.clone().unwrap_or_default(),
            poster: movie.poster.clone().unwrap_or_default(),
            duration: movie.duration.clone().unwrap_or_default(),
            size: movie.size.clone().unwrap_or_default(),
            quality: movie.quality.clone().unwrap_or_default(),
        }
    }

    /// Append a genre tag. Blank and already-present tags are ignored.
    ///
    /// Returns `true` if the tag was added.
    pub fn add_genre(&mut self, genre: &str) -> bool {
        let genre = genre.trim();
        if genre.is_empty() || self.genres.iter().any(|g| g == genre) {
            return false;
        }
        self.genres.push(genre.to_string());
        true
    }

    pub fn remove_genre(&mut self, genre: &str) {
        self.genres.retain(|g| g != genre);
    }

    /// Replace the genre list from comma-separated text.
    pub fn set_genres_from_text(&mut self, text: &str) {
        self.genres = parse_genre_list(text);
    }

    pub fn genre_text(&self) -> String {
        format_genre_list(&self.genres)
    }

    /// Build a validated create payload.
    pub fn to_new_movie(&self) -> Result<NewMovie, CoreError> {
        let movie = NewMovie {
            title: self.title.trim().to_string(),
            genre: self.genres.clone(),
            year: parse_field(&self.year, "Year")?,
            rating: parse_field(&self.rating, "Rating")?,
            description: self.description.trim().to_string(),
            download_url: non_blank(&self.download_url),
            poster: non_blank(&self.poster),
            duration: non_blank(&self.duration),
            size: non_blank(&self.size),
            quality: non_blank(&self.quality),
        };
        movie.check()?;
        Ok(movie)
    }

    /// Build a validated update payload replacing every field.
    ///
    /// Optional fields left blank are sent as cleared.
    pub fn to_changes(&self) -> Result<MovieChanges, CoreError> {
        let changes = MovieChanges::from(self.to_new_movie()?);
        changes.check()?;
        Ok(changes)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a numeric text field; blank means absent.
fn parse_field<T: std::str::FromStr>(value: &str, label: &str) -> Result<Option<T>, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("{label} must be a number, got '{value}'")))
}
