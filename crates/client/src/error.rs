use marquee_core::error::CoreError;
use marquee_core::types::DbId;

/// Errors surfaced by the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, or the raw body.
        message: String,
    },

    #[error("Movie {id} not found")]
    NotFound { id: DbId },

    /// A catalog mutation was attempted without an admin session.
    #[error("Admin session required")]
    AdminRequired,

    /// Form input failed local validation before any request was sent.
    #[error(transparent)]
    Core(#[from] CoreError),
}
