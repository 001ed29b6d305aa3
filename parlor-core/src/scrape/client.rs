use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ProviderError;

/// Shared HTTP client for every upstream call. The timeout is set once at
/// construction and applies to all requests; there is no unbounded path.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: std::time::Duration) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// GET a JSON document and decode it into `T`.
    ///
    /// Non-success statuses are mapped to typed errors; the provider's
    /// `status_message` body field is used for the message when it parses.
    pub async fn get_json<Q, T>(&self, url: &str, query: &Q) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body).map_err(ProviderError::from);
        }

        #[derive(Debug, serde::Deserialize)]
        struct UpstreamErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("upstream request failed with status {status}"));

        Err(status_error(status, message))
    }

    /// GET a page as text, typically HTML for the scraping adapters.
    /// Extra headers let callers present a browser user agent.
    pub async fn get_text<Q>(
        &self,
        url: &str,
        query: &Q,
        headers: &[(&'static str, &str)],
    ) -> Result<String, ProviderError>
    where
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(
                status,
                format!("upstream request failed with status {status}"),
            ));
        }

        response.text().await.map_err(ProviderError::from)
    }
}

fn status_error(status: StatusCode, message: String) -> ProviderError {
    match status.as_u16() {
        401 => ProviderError::InvalidApiKey,
        404 => ProviderError::NotFound,
        429 => ProviderError::RateLimited,
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_typed_errors() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            ProviderError::InvalidApiKey
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, String::new()),
            ProviderError::NotFound
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            ProviderError::RateLimited
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, String::new()),
            ProviderError::Api { status: 502, .. }
        ));
    }
}
