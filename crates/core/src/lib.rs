//! Domain types and pure logic for the Marquee movie catalog.
//!
//! This crate has no I/O. The store, the HTTP layer, and the client all
//! share the types and validation rules defined here.

pub mod catalog;
pub mod error;
pub mod movie;
pub mod types;
