//! The client's catalog state container.
//!
//! Holds the movie list as last fetched from the server, the search and
//! genre filter inputs, and the local admin session. Views read from it
//! and call its methods; it is passed around explicitly, never global.

use marquee_core::catalog::{all_genres, catalog_stats, filter_movies, CatalogStats, MovieQuery};
use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;

use crate::api::MovieApi;
use crate::error::ClientError;
use crate::session::{AdminCredentials, User};

pub struct CatalogContext {
    api: MovieApi,
    credentials: AdminCredentials,
    movies: Vec<Movie>,
    user: Option<User>,
    query: MovieQuery,
}

impl CatalogContext {
    /// Create an empty context without contacting the server.
    pub fn new(api: MovieApi, credentials: AdminCredentials) -> Self {
        Self {
            api,
            credentials,
            movies: Vec::new(),
            user: None,
            query: MovieQuery::default(),
        }
    }

    /// Create a context and load the movie list once.
    ///
    /// A failed fetch is logged and leaves the list empty.
    pub async fn initialize(api: MovieApi, credentials: AdminCredentials) -> Self {
        let mut ctx = Self::new(api, credentials);
        // Already logged inside `refresh`.
        let _ = ctx.refresh().await;
        ctx
    }

    /// Replace the local list with the server's.
    ///
    /// On failure the error is logged and returned, and the previous list
    /// is kept as-is.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.list().await {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "Movie list loaded");
                self.movies = movies;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch movies");
                Err(e)
            }
        }
    }

    // ---- catalog mutations (admin only) ----

    /// Create a movie on the server and append the stored record.
    pub async fn add_movie(&mut self, movie: &NewMovie) -> Result<Movie, ClientError> {
        self.require_admin()?;
        movie.check()?;

        let created = self.api.create(movie).await?;
        tracing::info!(movie_id = created.id, "Movie added");
        self.movies.push(created.clone());
        Ok(created)
    }

    /// Update a movie on the server and replace the local record with the
    /// server's version.
    ///
    /// `Ok(None)` when the server no longer has the movie; local state is
    /// left untouched in that case.
    pub async fn update_movie(
        &mut self,
        id: DbId,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, ClientError> {
        self.require_admin()?;
        changes.check()?;

        let Some(updated) = self.api.update(id, changes).await? else {
            tracing::warn!(movie_id = id, "Update target missing on server");
            return Ok(None);
        };

        if let Some(slot) = self.movies.iter_mut().find(|m| m.id == id) {
            *slot = updated.clone();
        }
        tracing::info!(movie_id = id, "Movie updated");
        Ok(Some(updated))
    }

    /// Delete a movie on the server and drop it from the local list.
    ///
    /// When the server reports the movie missing, the local copy is
    /// dropped as well and the not-found error is returned.
    pub async fn delete_movie(&mut self, id: DbId) -> Result<(), ClientError> {
        self.require_admin()?;

        let result = self.api.delete(id).await;
        if matches!(result, Ok(()) | Err(ClientError::NotFound { .. })) {
            self.movies.retain(|m| m.id != id);
        }
        if result.is_ok() {
            tracing::info!(movie_id = id, "Movie deleted");
        }
        result
    }

    // ---- session ----

    /// Open an admin session if the credentials match. No server call.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.credentials.verify(username, password) {
            Ok(user) => {
                tracing::info!(username = %user.username, "Admin logged in");
                self.user = Some(user);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Login rejected");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    fn require_admin(&self) -> Result<(), ClientError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ClientError::AdminRequired)
        }
    }

    // ---- filters ----

    pub fn set_search_query(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a genre chip; `None` (or an empty string) shows all genres.
    pub fn set_selected_genre(&mut self, genre: Option<String>) {
        self.query.genre = genre.filter(|g| !g.is_empty());
    }

    pub fn search_query(&self) -> &str {
        &self.query.search
    }

    pub fn selected_genre(&self) -> Option<&str> {
        self.query.genre.as_deref()
    }

    // ---- derived views ----

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_movie(&self, id: DbId) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Movies matching the current search text and genre selection.
    pub fn filtered_movies(&self) -> Vec<&Movie> {
        filter_movies(&self.movies, &self.query)
    }

    pub fn genres(&self) -> Vec<String> {
        all_genres(&self.movies)
    }

    pub fn stats(&self) -> CatalogStats {
        catalog_stats(&self.movies)
    }

    pub fn api(&self) -> &MovieApi {
        &self.api
    }
}
