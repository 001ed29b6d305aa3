//! # Parlor Server
//!
//! REST API for the Parlor media catalog.
//!
//! ## Overview
//!
//! - **Catalog CRUD**: movies, TV shows, flat shows, people, genres, images,
//!   videos, playlists, and concerts over Postgres.
//! - **Metadata scraping**: composite detail lookups, search, and image
//!   search against external providers, served through the aggregation
//!   layer in `parlor-core`.
//! - **Auth**: register/login with Argon2 password hashes and typed JWT
//!   claims; mutations and scrape routes require a bearer token.
//!
//! Every response is wrapped in the `{meta, data, message, error}` envelope.

pub mod envelope;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use errors::{AppError, AppResult};
pub use state::AppState;
