//! Image search through a search engine's reverse-engineered JSON endpoint.
//!
//! The HTML search page embeds a session token (`vqd`) and echoes the query
//! inside inline script text; both are required by the JSON image endpoint.
//! Extraction is regex-based and inherently brittle against upstream markup
//! changes, which is why it is confined to this adapter. When nothing
//! matches, the second request still proceeds with empty values instead of
//! being silently hardened; the endpoint then answers with no results.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;

use super::ImageHit;
use crate::scrape::client::UpstreamClient;
use crate::scrape::error::ProviderError;

pub const DUCKDUCKGO_BASE: &str = "https://duckduckgo.com";

static VQD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vqd=(.*?)&").expect("static pattern"));
static QUERY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"q=(.*?)&").expect("static pattern"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ResultPage {
    results: Vec<ResultEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ResultEntry {
    thumbnail: String,
    image: String,
}

#[derive(Debug, Clone)]
pub struct DuckDuckGoImageSearch {
    client: UpstreamClient,
    base: String,
}

impl DuckDuckGoImageSearch {
    pub fn new(client: UpstreamClient) -> Self {
        Self::with_base_url(client, DUCKDUCKGO_BASE)
    }

    pub fn with_base_url(client: UpstreamClient, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<ImageHit>, ProviderError> {
        let html = self
            .client
            .get_text(
                &format!("{}/", self.base),
                &[
                    ("q", query),
                    ("iar", "images"),
                    ("iax", "images"),
                    ("ia", "images"),
                ],
                &[],
            )
            .await?;

        let (vqd, echoed_query) = extract_session(&html);

        let page: ResultPage = self
            .client
            .get_json(
                &format!("{}/i.js", self.base),
                &[
                    ("l", "us-en"),
                    ("o", "json"),
                    ("q", echoed_query.as_str()),
                    ("vqd", vqd.as_str()),
                    ("f", ",,,"),
                    ("p", "1"),
                    ("v7exp", "a"),
                ],
            )
            .await?;

        Ok(page
            .results
            .into_iter()
            .map(|entry| ImageHit {
                thumbnail: entry.thumbnail,
                image: entry.image,
            })
            .collect())
    }
}

/// Pull the session token and echoed query out of inline script text.
/// First match per pattern wins; misses leave the value empty.
pub(crate) fn extract_session(html: &str) -> (String, String) {
    let mut vqd = String::new();
    let mut echoed = String::new();

    // `Html` is !Send, so parsing stays inside this synchronous helper and
    // never lives across an await.
    let document = Html::parse_document(html);
    let script = Selector::parse("script").expect("static selector");

    for element in document.select(&script) {
        let text: String = element.text().collect();
        if vqd.is_empty() {
            if let Some(captures) = VQD_PATTERN.captures(&text) {
                vqd = captures[1].to_string();
            }
        }
        if echoed.is_empty() {
            if let Some(captures) = QUERY_PATTERN.captures(&text) {
                echoed = captures[1].to_string();
            }
        }
        if !vqd.is_empty() && !echoed.is_empty() {
            break;
        }
    }

    (vqd, echoed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_and_query_from_script_text() {
        let html = r#"<html><body>
            <script>var init = load('/d.js?q=the%20matrix&l=us-en&vqd=3-123456789-987654321&p=1');</script>
        </body></html>"#;

        let (vqd, query) = extract_session(html);
        assert_eq!(vqd, "3-123456789-987654321");
        assert_eq!(query, "the%20matrix");
    }

    #[test]
    fn first_match_wins_across_scripts() {
        let html = r#"<html><body>
            <script>a('?q=first&x=1&vqd=token-one&y=2')</script>
            <script>b('?q=second&x=1&vqd=token-two&y=2')</script>
        </body></html>"#;

        let (vqd, query) = extract_session(html);
        assert_eq!(vqd, "token-one");
        assert_eq!(query, "first");
    }

    #[test]
    fn missing_token_leaves_values_empty() {
        let (vqd, query) = extract_session("<html><body><p>no scripts here</p></body></html>");
        assert!(vqd.is_empty());
        assert!(query.is_empty());
    }
}
