use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    services::{SearchProvider, SerpApiProvider},
};

/// Shared application state
///
/// Built once at startup from [`Config`] and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no SerpAPI key is configured
    pub search_provider: Option<Arc<dyn SearchProvider>>,
}

impl AppState {
    /// Creates state from configuration, wiring the SerpAPI provider if a key is set
    pub fn new(config: Config) -> AppResult<Self> {
        let search_provider = match config.serpapi_key() {
            Some(api_key) => {
                let provider = SerpApiProvider::new(
                    api_key.to_string(),
                    config.serpapi_endpoint.clone(),
                    Duration::from_secs(config.request_timeout_secs),
                )?;
                Some(Arc::new(provider) as Arc<dyn SearchProvider>)
            }
            None => {
                tracing::warn!("SERPAPI_KEY not configured, /search will return an error");
                None
            }
        };

        Ok(Self::with_provider(search_provider))
    }

    /// Creates state around an explicit provider, e.g. a stub in tests
    pub fn with_provider(search_provider: Option<Arc<dyn SearchProvider>>) -> Self {
        Self { search_provider }
    }
}
