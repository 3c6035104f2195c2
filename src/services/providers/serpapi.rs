//! SerpAPI provider
//!
//! Routes shopping queries to the `google_shopping` engine and hotel queries
//! to `google_hotels`, returning the raw records for the extractor.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    services::providers::{SearchParams, SearchProvider},
};

#[derive(Clone)]
pub struct SerpApiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl SerpApiProvider {
    /// Creates a provider whose requests all share one fixed timeout
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Pulls the result list for `params`' query type out of a payload
    ///
    /// A missing or non-array key means "no results".
    fn results_from_payload(params: &SearchParams, mut payload: Value) -> Vec<Value> {
        match payload
            .get_mut(params.query_type.results_key())
            .map(Value::take)
        {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl SearchProvider for SerpApiProvider {
    async fn fetch_results(&self, params: &SearchParams) -> AppResult<Vec<Value>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&params.to_query_pairs())
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Upstream error bodies may echo request details; drop them
            tracing::warn!(
                status = status.as_u16(),
                engine = params.query_type.engine(),
                provider = self.name(),
                "SerpAPI returned non-success status"
            );
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let response_text = response.text().await?;
        let payload: Value = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse SerpAPI response");
            AppError::Internal(format!("Failed to parse SerpAPI response: {}", e))
        })?;

        let records = Self::results_from_payload(params, payload);

        tracing::info!(
            query = %params.query,
            engine = params.query_type.engine(),
            results = records.len(),
            provider = self.name(),
            "Search completed"
        );

        Ok(records)
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }
}
