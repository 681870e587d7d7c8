//! Database row structs.
//!
//! Rows are `FromRow` mirrors of a table and convert into the shared
//! domain types from `marquee_core`, which own the wire format.

pub mod movie;
