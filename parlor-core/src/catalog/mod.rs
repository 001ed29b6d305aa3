//! Postgres-backed CRUD repositories for catalog entities.
//!
//! Queries are runtime-checked (`sqlx::query_as` with explicit binds) so the
//! crate builds without a live database. List-valued attributes are JSONB
//! columns on the owning row; there is no association management here.

pub mod concerts;
pub mod genres;
pub mod images;
pub mod movies;
pub mod people;
pub mod playlists;
pub mod shows;
pub mod tv;
pub mod users;
pub mod videos;
