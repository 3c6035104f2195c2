use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{QueryType, SearchResponse},
    services::{
        classifier::classify,
        extractor::{extract_hotel_results, extract_shopping_results},
        providers::{SearchParams, SearchProvider},
    },
};

/// Prefix for the single retry of a hotel query that found nothing
pub const HOTEL_FALLBACK_PREFIX: &str = "hotels ";

/// Classifies, fetches and normalizes one search query
///
/// `provider` is `None` when no credential is configured, in which case no
/// outbound call is made. Hotel queries with no results are retried exactly
/// once as `"hotels " + query`; empty results after that are not an error.
pub async fn search(
    provider: Option<&dyn SearchProvider>,
    query: &str,
    today: NaiveDate,
) -> AppResult<SearchResponse> {
    let provider = provider.ok_or(AppError::ConfigMissing)?;

    let query_type = classify(query);
    tracing::debug!(query = %query, query_type = %query_type, "Query classified");

    let params = SearchParams::new(query, query_type, today);
    let mut records = provider.fetch_results(&params).await?;

    if query_type == QueryType::Hotel && records.is_empty() {
        let fallback_query = format!("{}{}", HOTEL_FALLBACK_PREFIX, query);
        tracing::info!(
            query = %query,
            fallback_query = %fallback_query,
            provider = provider.name(),
            "No hotel results, retrying with fallback query"
        );
        records = provider
            .fetch_results(&params.with_query(fallback_query))
            .await?;
    }

    let response = match query_type {
        QueryType::Hotel => SearchResponse::Hotel(extract_hotel_results(&records)),
        QueryType::Shopping => SearchResponse::Shopping(extract_shopping_results(&records)),
    };

    Ok(response)
}
