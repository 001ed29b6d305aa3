//! Core library for the Parlor media catalog.
//!
//! Three concerns live here:
//! - `scrape`: the metadata aggregation subsystem - upstream clients,
//!   per-provider decoders, the aggregator, and the image-search adapters.
//! - `catalog`: Postgres-backed CRUD repositories for catalog entities.
//! - `auth`: password hashing and typed JWT claims.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod scrape;

pub use error::CoreError;
