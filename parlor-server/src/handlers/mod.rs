//! Request handlers. Catalog handlers are thin wrappers over the
//! repositories in `parlor-core::catalog`; scrape handlers delegate to the
//! aggregation layer.

pub mod auth;
pub mod concerts;
pub mod genres;
pub mod images;
pub mod movies;
pub mod people;
pub mod playlists;
pub mod scrape;
pub mod shows;
pub mod tv;
pub mod videos;

use crate::envelope;

/// Liveness probe.
pub async fn healthz() -> axum::Json<envelope::Envelope<&'static str>> {
    envelope::success("ok")
}
