//! Client-side data and session layer for the movie catalog.
//!
//! [`context::CatalogContext`] owns the fetched movie list, the filter
//! inputs, and the local admin session, and talks to the REST API through
//! [`api::MovieApi`].

pub mod api;
pub mod context;
pub mod error;
pub mod form;
pub mod session;
