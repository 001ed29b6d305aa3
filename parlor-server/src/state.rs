use std::sync::Arc;

use parlor_config::Config;
use parlor_core::scrape::ScrapeService;
use sqlx::PgPool;

/// Shared application state. Everything inside is cheap to clone per
/// request; no request-scoped mutation happens here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub scrape: Arc<ScrapeService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, scrape: ScrapeService, config: Config) -> Self {
        Self {
            pool,
            scrape: Arc::new(scrape),
            config: Arc::new(config),
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.auth.jwt_secret
    }
}
