/// Errors surfaced by upstream metadata and image-search providers.
///
/// Fetch and decode failures are distinct: a transport problem and a payload
/// the provider changed under us call for different fixes.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("upstream error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("not found")]
    NotFound,

    #[error("invalid API key")]
    InvalidApiKey,

    #[error("rate limited")]
    RateLimited,

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// True when the failure means the identifier does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound)
    }
}
