use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod product;
pub mod serpapi;

pub use product::{Product, CATALOG};

/// Routing decision for a free-text search query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Hotel,
    Shopping,
}

impl QueryType {
    /// SerpAPI engine serving this kind of query
    pub fn engine(&self) -> &'static str {
        match self {
            QueryType::Hotel => "google_hotels",
            QueryType::Shopping => "google_shopping",
        }
    }

    /// Key of the result list in the engine's JSON payload
    pub fn results_key(&self) -> &'static str {
        match self {
            QueryType::Hotel => "properties",
            QueryType::Shopping => "shopping_results",
        }
    }
}

impl Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryType::Hotel => write!(f, "hotel"),
            QueryType::Shopping => write!(f, "shopping"),
        }
    }
}

/// Body of `POST /search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Normalized shopping listing returned to the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShoppingResult {
    pub title: String,
    pub price: String,
    pub link: String,
    pub source: String,
    pub thumbnail: String,
    pub tag: String,
    pub delivery: String,
    pub rating: String,
    pub reviews: String,
    pub extracted_price: String,
    pub old_price: String,
}

/// Normalized hotel listing returned to the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HotelResult {
    pub name: String,
    pub address: String,
    pub price: String,
    pub rating: String,
    pub reviews: String,
    pub thumbnail: String,
    pub link: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub booking_link: String,
    pub booking_site: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub description: String,
}

/// Successful search payload: `{"type": "...", "results": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "results", rename_all = "lowercase")]
pub enum SearchResponse {
    Hotel(Vec<HotelResult>),
    Shopping(Vec<ShoppingResult>),
}

impl SearchResponse {
    pub fn query_type(&self) -> QueryType {
        match self {
            SearchResponse::Hotel(_) => QueryType::Hotel,
            SearchResponse::Shopping(_) => QueryType::Shopping,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResponse::Hotel(results) => results.len(),
            SearchResponse::Shopping(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of every `POST /search` reply; failures are reported in-band
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchEnvelope {
    Results(SearchResponse),
    Error { error: String },
}

/// Body of `GET /recommendations`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Product>,
    pub personalization_score: f64,
    pub user_id: i64,
    pub algorithm: &'static str,
    pub total_products: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_type_serialization() {
        assert_eq!(serde_json::to_string(&QueryType::Hotel).unwrap(), "\"hotel\"");
        assert_eq!(
            serde_json::to_string(&QueryType::Shopping).unwrap(),
            "\"shopping\""
        );
        assert_eq!(format!("{}", QueryType::Hotel), "hotel");
    }

    #[test]
    fn test_query_type_engine() {
        assert_eq!(QueryType::Hotel.engine(), "google_hotels");
        assert_eq!(QueryType::Shopping.engine(), "google_shopping");
        assert_eq!(QueryType::Hotel.results_key(), "properties");
        assert_eq!(QueryType::Shopping.results_key(), "shopping_results");
    }

    #[test]
    fn test_search_response_shape() {
        let response = SearchResponse::Shopping(vec![ShoppingResult {
            title: "Nike Air Max 270".to_string(),
            ..ShoppingResult::default()
        }]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["type"], "shopping");
        assert_eq!(value["results"][0]["title"], "Nike Air Max 270");
        assert_eq!(value["results"][0]["old_price"], "");
    }

    #[test]
    fn test_search_envelope_error_shape() {
        let envelope = SearchEnvelope::Error {
            error: "SerpAPI key not configured".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "error": "SerpAPI key not configured" })
        );
    }

    #[test]
    fn test_search_envelope_results_shape() {
        let envelope = SearchEnvelope::Results(SearchResponse::Hotel(vec![]));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "type": "hotel", "results": [] })
        );
    }
}
