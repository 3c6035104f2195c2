use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::RecommendationResponse,
    services::recommendations,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(params) = query.map_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Invalid recommendations query");
        AppError::InvalidInput(e.body_text())
    })?;

    let response = recommendations::get_recommendations(params.user_id).map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Recommendation generation failed");
        e
    })?;

    tracing::info!(
        request_id = %request_id,
        user_id = params.user_id,
        recommendations = response.recommendations.len(),
        "Recommendations generated"
    );

    Ok(Json(response))
}
