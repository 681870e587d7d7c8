//! REST client for the `/api/movies` endpoints.
//!
//! Thin wrapper over [`reqwest`]: one method per endpoint, non-2xx
//! statuses decoded into [`ClientError`].

use marquee_core::movie::{Movie, MovieChanges, NewMovie};
use marquee_core::types::DbId;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// Default base URL of a locally running API server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client for a single catalog API server.
#[derive(Debug, Clone)]
pub struct MovieApi {
    client: reqwest::Client,
    base_url: String,
}

/// Error body produced by the API (`{"error": ..., "code": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl MovieApi {
    /// Create a client for the server at `base_url`, e.g. `http://host:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/movies`
    pub async fn list(&self) -> Result<Vec<Movie>, ClientError> {
        let response = self.client.get(self.movies_url()).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/movies/{id}`
    pub async fn get(&self, id: DbId) -> Result<Movie, ClientError> {
        let response = self.client.get(self.movie_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id });
        }
        Self::parse_response(response).await
    }

    /// `POST /api/movies`
    pub async fn create(&self, movie: &NewMovie) -> Result<Movie, ClientError> {
        let response = self
            .client
            .post(self.movies_url())
            .json(movie)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/movies/{id}`
    ///
    /// `Ok(None)` when the server has no movie with this ID.
    pub async fn update(
        &self,
        id: DbId,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, ClientError> {
        let response = self
            .client
            .put(self.movie_url(id))
            .json(changes)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/movies/{id}`
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.movie_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { id });
        }
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn movies_url(&self) -> String {
        format!("{}/api/movies", self.base_url)
    }

    fn movie_url(&self, id: DbId) -> String {
        format!("{}/api/movies/{id}", self.base_url)
    }

    /// Return the response unchanged on a 2xx status, otherwise a
    /// [`ClientError::Api`] carrying the server's error message.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl Default for MovieApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
