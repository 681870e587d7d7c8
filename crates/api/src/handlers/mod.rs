//! Request handlers.
//!
//! Handlers validate input with the rules in `marquee_core`, delegate to the
//! [`MovieStore`](marquee_db::store::MovieStore) in [`AppState`](crate::state::AppState),
//! and map errors via [`AppError`](crate::error::AppError).

pub mod movies;
