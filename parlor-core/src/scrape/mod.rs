//! The metadata aggregation subsystem.
//!
//! Upstream providers are consumed through a single bounded-timeout HTTP
//! client; per-provider decoders map raw JSON into tolerant intermediate
//! records; the aggregator merges them into normalized output records; and
//! the image-search adapters reduce three very different providers to one
//! common hit shape.

pub mod client;
pub mod detail;
pub mod error;
pub mod images;
pub mod omdb;
pub mod tmdb;
pub mod urls;

use std::time::Duration;

pub use client::UpstreamClient;
pub use detail::{
    Aggregator, CastCredit, CrewCredit, EpisodeDetail, MovieDetail, SearchHit,
    SeasonDetail, TvDetail, VideoLink,
};
pub use error::ProviderError;
pub use images::{
    ImageHit, ImageKind, duckduckgo::DuckDuckGoImageSearch,
    google::GoogleImageSearch, tmdb::TmdbImageSearch,
};
pub use omdb::OmdbClient;
pub use tmdb::{SearchKind, TmdbClient};

/// Everything the HTTP surface needs to serve scrape routes, wired to the
/// real provider endpoints.
#[derive(Debug)]
pub struct ScrapeService {
    pub metadata: Aggregator,
    pub tmdb_images: TmdbImageSearch,
    pub duckduckgo: DuckDuckGoImageSearch,
    pub google: GoogleImageSearch,
}

impl ScrapeService {
    pub fn new(
        tmdb_api_key: impl Into<String>,
        omdb_api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = UpstreamClient::new(timeout)?;
        let tmdb = TmdbClient::new(client.clone(), tmdb_api_key);
        let omdb = OmdbClient::new(client.clone(), omdb_api_key);

        Ok(Self {
            metadata: Aggregator::new(tmdb.clone(), omdb),
            tmdb_images: TmdbImageSearch::new(tmdb),
            duckduckgo: DuckDuckGoImageSearch::new(client.clone()),
            google: GoogleImageSearch::new(client),
        })
    }
}
