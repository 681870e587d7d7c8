//! Marquee REST API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! router) so integration tests, the client crate's tests, and the binary
//! entrypoint all assemble the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
