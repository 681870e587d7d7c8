//! Local admin session.
//!
//! Credentials are checked in-process and never sent to the server. This
//! gates the admin UI only; it is not an access control boundary.

use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// ID given to the single local admin user.
const ADMIN_USER_ID: DbId = 1;

/// The signed-in user. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
}

/// The username/password pair that opens an admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from the environment, falling back to the defaults.
    ///
    /// | Env Var                  | Default    |
    /// |--------------------------|------------|
    /// | `MARQUEE_ADMIN_USERNAME` | `admin`    |
    /// | `MARQUEE_ADMIN_PASSWORD` | `admin123` |
    pub fn from_env() -> Self {
        let username = std::env::var("MARQUEE_ADMIN_USERNAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into());
        let password = std::env::var("MARQUEE_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());
        Self::new(username, password)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt and produce the admin user on a match.
    pub fn verify(&self, username: &str, password: &str) -> Result<User, CoreError> {
        if username != self.username || password != self.password {
            return Err(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ));
        }

        Ok(User {
            id: ADMIN_USER_ID,
            username: self.username.clone(),
            is_admin: true,
        })
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}
