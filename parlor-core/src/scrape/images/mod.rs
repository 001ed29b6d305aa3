//! Image-search adapters.
//!
//! Three very different providers (a structured image-listing API, a search
//! engine's reverse-engineered JSON endpoint, and raw HTML scraping) all
//! produce the same normalized hit shape.

pub mod duckduckgo;
pub mod google;
pub mod tmdb;

use serde::{Deserialize, Serialize};

/// The common result shape every adapter produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHit {
    pub thumbnail: String,
    pub image: String,
}

/// Requested artwork kind for the structured adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Banners,
    Posters,
}

impl ImageKind {
    /// Parse the query-string value. Unknown kinds are `None`, which the
    /// adapter turns into an empty result list rather than an error.
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "banners" => Some(ImageKind::Banners),
            "posters" => Some(ImageKind::Posters),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_kinds_parse() {
        assert_eq!(ImageKind::from_query("banners"), Some(ImageKind::Banners));
        assert_eq!(ImageKind::from_query("posters"), Some(ImageKind::Posters));
        assert_eq!(ImageKind::from_query("stills"), None);
        assert_eq!(ImageKind::from_query(""), None);
    }
}
