//! Movie records, request DTOs, and input validation.
//!
//! The wire format is camelCase JSON. `id` is the only identifier a movie
//! ever has; older clients that send `downloadLink` are accepted through a
//! serde alias, but responses always use `downloadUrl`.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: u64 = 300;

/// Maximum number of genre tags on a single movie.
pub const MAX_GENRES: usize = 20;

/// Maximum length of a single genre tag.
pub const MAX_GENRE_LEN: usize = 50;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "downloadLink")]
    pub download_url: Option<String>,
    pub poster: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Payload for creating a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    #[validate(
        length(min = 1, max = MAX_TITLE_LEN, message = "Title must be 1-300 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genre: Vec<String>,

    #[validate(range(min = MIN_YEAR, max = MAX_YEAR, message = "Year must be between 1888 and 2100"))]
    pub year: Option<i32>,

    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,

    #[serde(default)]
    pub description: String,

    #[serde(alias = "downloadLink")]
    #[validate(url(message = "Download URL must be a valid URL"))]
    pub download_url: Option<String>,

    #[validate(url(message = "Poster must be a valid URL"))]
    pub poster: Option<String>,

    pub duration: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
}

/// Payload for updating a movie. Only the provided fields are replaced.
///
/// Nullable fields are `Option<Option<T>>`: absent from the JSON body
/// (`None`) keeps the stored value, an explicit `null` (`Some(None)`)
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieChanges {
    #[validate(
        length(min = 1, max = MAX_TITLE_LEN, message = "Title must be 1-300 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: Option<String>,

    #[validate(custom(function = "validate_genres"))]
    pub genre: Option<Vec<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub year: Option<Option<i32>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<f64>>,

    pub description: Option<String>,

    #[serde(
        alias = "downloadLink",
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub download_url: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub poster: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub duration: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub size: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub quality: Option<Option<String>>,
}

/// The values a [`MovieChanges`] writes into nullable columns, checked
/// with the same rules as [`NewMovie`]. Cleared fields are not checked.
#[derive(Validate)]
struct ReplacementValues {
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR, message = "Year must be between 1888 and 2100"))]
    year: Option<i32>,

    #[validate(range(min = MIN_RATING, max = MAX_RATING, message = "Rating must be between 0 and 10"))]
    rating: Option<f64>,

    #[validate(url(message = "Download URL must be a valid URL"))]
    download_url: Option<String>,

    #[validate(url(message = "Poster must be a valid URL"))]
    poster: Option<String>,
}

/// Keeps an explicit JSON `null` apart from an absent field: with
/// `#[serde(default)]` a missing key stays `None`, while `null` becomes
/// `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl NewMovie {
    /// Run every field rule, collapsing failures into a single
    /// [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }

    /// Materialize the payload as a stored record.
    pub fn into_movie(self, id: DbId, now: Timestamp) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
            description: self.description,
            download_url: self.download_url,
            poster: self.poster,
            duration: self.duration,
            size: self.size,
            quality: self.quality,
            created_at: now,
            updated_at: now,
        }
    }
}

impl MovieChanges {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()?;
        ReplacementValues {
            year: self.year.flatten(),
            rating: self.rating.flatten(),
            download_url: self.download_url.clone().flatten(),
            poster: self.poster.clone().flatten(),
        }
        .validate()?;
        Ok(())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == MovieChanges::default()
    }

    /// Overwrite the provided fields on `movie` and bump `updated_at`.
    pub fn apply_to(self, movie: &mut Movie, now: Timestamp) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(description) = self.description {
            movie.description = description;
        }
        if let Some(download_url) = self.download_url {
            movie.download_url = download_url;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(size) = self.size {
            movie.size = size;
        }
        if let Some(quality) = self.quality {
            movie.quality = quality;
        }
        movie.updated_at = now;
    }
}

impl From<NewMovie> for MovieChanges {
    /// Changes that set every field to the payload's value, clearing the
    /// nullable ones the payload leaves empty.
    fn from(new: NewMovie) -> Self {
        MovieChanges {
            title: Some(new.title),
            genre: Some(new.genre),
            year: Some(new.year),
            rating: Some(new.rating),
            description: Some(new.description),
            download_url: Some(new.download_url),
            poster: Some(new.poster),
            duration: Some(new.duration),
            size: Some(new.size),
            quality: Some(new.quality),
        }
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("Title must not be blank")));
    }
    Ok(())
}

/// Genre tags keep their submitted order and may repeat; each must be a
/// non-blank tag of bounded length.
fn validate_genres(genres: &[String]) -> Result<(), ValidationError> {
    if genres.len() > MAX_GENRES {
        return Err(ValidationError::new("too_many_genres")
            .with_message(Cow::from("A maximum of 20 genres is allowed")));
    }
    for genre in genres {
        if genre.trim().is_empty() {
            return Err(ValidationError::new("blank_genre")
                .with_message(Cow::from("Genres must not be blank")));
        }
        if genre.chars().count() > MAX_GENRE_LEN {
            return Err(ValidationError::new("genre_too_long")
                .with_message(Cow::from("Each genre must be at most 50 characters")));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
