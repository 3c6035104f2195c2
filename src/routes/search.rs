use axum::{extract::State, Extension, Json};
use chrono::Local;

use crate::{
    middleware::RequestId,
    models::{SearchEnvelope, SearchRequest},
    routes::AppState,
    services::search as search_service,
};

/// Handler for search endpoint
///
/// Always answers 200; failures come back as `{"error": ...}`.
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Json<SearchEnvelope> {
    tracing::info!(
        request_id = %request_id,
        query = %request.query,
        "Processing search request"
    );

    let today = Local::now().date_naive();
    let result =
        search_service::search(state.search_provider.as_deref(), &request.query, today).await;

    match result {
        Ok(response) => {
            tracing::info!(
                request_id = %request_id,
                query_type = %response.query_type(),
                results = response.len(),
                "Search completed"
            );
            Json(SearchEnvelope::Results(response))
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Search failed");
            Json(SearchEnvelope::Error {
                error: e.envelope_message(),
            })
        }
    }
}
