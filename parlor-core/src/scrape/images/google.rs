//! Generic HTML-page image scraping: no second request, just image URLs
//! lifted out of inline script text by file extension.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::ImageHit;
use crate::scrape::client::UpstreamClient;
use crate::scrape::error::ProviderError;

pub const GOOGLE_SEARCH_BASE: &str = "https://www.google.co.id";

/// Result pages are only served full-fat to something that looks like a
/// desktop browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_3) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.116 Safari/537.36 Edg/80.0.361.57";

static IMAGE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http(s?):)([/|.|\w|\s|-])*\.(?:jpg|gif|png)").expect("static pattern")
});

#[derive(Debug, Clone)]
pub struct GoogleImageSearch {
    client: UpstreamClient,
    base: String,
}

impl GoogleImageSearch {
    pub fn new(client: UpstreamClient) -> Self {
        Self::with_base_url(client, GOOGLE_SEARCH_BASE)
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
                &format!("{}/search", self.base),
                &[("q", query), ("source", "lnms"), ("tbm", "isch")],
                &[
                    ("cache-control", "no-cache"),
                    ("user-agent", BROWSER_USER_AGENT),
                ],
            )
            .await?;

        Ok(extract_image_urls(&html)
            .into_iter()
            .map(|url| ImageHit {
                thumbnail: url.clone(),
                image: url,
            })
            .collect())
    }
}

/// Collect image URLs from every inline script, in document order.
pub(crate) fn extract_image_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let script = Selector::parse("script").expect("static selector");

    let mut urls = Vec::new();
    for element in document.select(&script) {
        let text: String = element.text().collect();
        for found in IMAGE_URL_PATTERN.find_iter(&text) {
            urls.push(found.as_str().to_string());
        }
    }
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_image_urls_from_script_text() {
        let html = r#"<html><body>
            <script>var data = ["https://example.com/a.jpg","https://example.com/b.png"];</script>
            <script>var more = "http://cdn.example.com/c.gif";</script>
        </body></html>"#;

        let urls = extract_image_urls(html);
        assert_eq!(
            urls,
            vec![
                "https://example.com/a.jpg",
                "https://example.com/b.png",
                "http://cdn.example.com/c.gif",
            ]
        );
    }

    #[test]
    fn non_image_urls_are_ignored() {
        let html = r#"<script>fetch("https://example.com/api.json")</script>"#;
        assert!(extract_image_urls(html).is_empty());
    }

    #[test]
    fn zero_matches_yields_empty_list() {
        assert!(extract_image_urls("<html><body></body></html>").is_empty());
    }
}
