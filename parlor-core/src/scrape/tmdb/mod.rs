//! Thin client for the TMDB-shaped metadata provider.

pub mod types;

use super::client::UpstreamClient;
use super::error::ProviderError;
use types::{
    Credits, EpisodeDetails, ImagesResponse, MovieDetails, SearchPage,
    SeasonDetails, TvDetails, VideoList,
};

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Which search index to hit. Defaults to movies, matching the catalog UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Movie,
    Tv,
}

impl SearchKind {
    pub fn from_query(value: &str) -> Self {
        match value {
            "tv" => SearchKind::Tv,
            _ => SearchKind::Movie,
        }
    }

    fn as_path(self) -> &'static str {
        match self {
            SearchKind::Movie => "movie",
            SearchKind::Tv => "tv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: UpstreamClient,
    api_key: String,
    base: String,
}

impl TmdbClient {
    pub fn new(client: UpstreamClient, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, TMDB_API_BASE)
    }

    /// Point the client at a different base URL, used by tests to target a
    /// local mock server.
    pub fn with_base_url(
        client: UpstreamClient,
        api_key: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Movie detail with credits and videos appended, so one primary call
    /// carries everything the aggregator merges.
    pub async fn movie(&self, id: u64) -> Result<MovieDetails, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/movie/{id}")),
                &[
                    ("api_key", self.api_key.as_str()),
                    ("append_to_response", "credits,videos"),
                ],
            )
            .await
    }

    pub async fn movie_images(&self, id: u64) -> Result<ImagesResponse, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/movie/{id}/images")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn tv(&self, id: u64) -> Result<TvDetails, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn tv_credits(&self, id: u64) -> Result<Credits, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}/credits")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn tv_videos(&self, id: u64) -> Result<VideoList, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}/videos")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn tv_images(&self, id: u64) -> Result<ImagesResponse, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}/images")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn season(&self, id: u64, season: u16) -> Result<SeasonDetails, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}/season/{season}")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn episode(
        &self,
        id: u64,
        season: u16,
        episode: u16,
    ) -> Result<EpisodeDetails, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/tv/{id}/season/{season}/episode/{episode}")),
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    pub async fn search(&self, kind: SearchKind, query: &str) -> Result<SearchPage, ProviderError> {
        self.client
            .get_json(
                &self.url(&format!("/search/{}", kind.as_path())),
                &[("api_key", self.api_key.as_str()), ("query", query)],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_search_kind_defaults_to_movie() {
        assert_eq!(SearchKind::from_query("tv"), SearchKind::Tv);
        assert_eq!(SearchKind::from_query("movie"), SearchKind::Movie);
        assert_eq!(SearchKind::from_query(""), SearchKind::Movie);
        assert_eq!(SearchKind::from_query("podcast"), SearchKind::Movie);
    }
}
