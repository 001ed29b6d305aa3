//! Client for the secondary ratings/awards provider, keyed by IMDb id.
//!
//! The provider answers 200 for unknown ids and signals the miss in the
//! body (`"Response": "False"`), so the miss check happens after decoding.

use serde::Deserialize;

use super::client::UpstreamClient;
use super::error::ProviderError;

pub const OMDB_API_BASE: &str = "https://www.omdbapi.com";

/// The raw secondary-source record. Everything is a string on the wire,
/// including the rating; parsing happens at overlay time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Writer")]
    pub writer: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Awards")]
    pub awards: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: String,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: UpstreamClient,
    api_key: String,
    base: String,
}

impl OmdbClient {
    pub fn new(client: UpstreamClient, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, OMDB_API_BASE)
    }

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

    pub async fn by_imdb_id(&self, imdb_id: &str) -> Result<OmdbRecord, ProviderError> {
        let record: OmdbRecord = self
            .client
            .get_json(
                &self.base,
                &[("apikey", self.api_key.as_str()), ("i", imdb_id)],
            )
            .await?;

        if record.response.eq_ignore_ascii_case("false") {
            return Err(ProviderError::NotFound);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_from_provider_casing() {
        let raw = r#"{
            "Title": "The Matrix",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Awards": "Won 4 Oscars.",
            "imdbRating": "8.7",
            "Response": "True"
        }"#;
        let record: OmdbRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.imdb_rating, "8.7");
        assert_eq!(record.awards, "Won 4 Oscars.");
        assert!(record.rated.is_empty());
    }
}
