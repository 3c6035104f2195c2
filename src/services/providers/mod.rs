//! Search data provider abstraction
//!
//! The request handler only needs "run this query, give me the raw result
//! records", so providers can be swapped (or mocked in tests) behind
//! [`SearchProvider`].

use chrono::{Days, NaiveDate};
use serde_json::Value;

use crate::{error::AppResult, models::QueryType};

pub mod serpapi;

pub use serpapi::SerpApiProvider;

const HOTEL_CHECK_IN_OFFSET_DAYS: u64 = 7;
const HOTEL_CHECK_OUT_OFFSET_DAYS: u64 = 8;
const HOTEL_ADULTS: u32 = 2;
const HOTEL_CURRENCY: &str = "USD";
const LANGUAGE: &str = "en";
const COUNTRY: &str = "us";

/// Hotel-only request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayDetails {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub currency: &'static str,
}

/// Everything a provider needs to run one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub query_type: QueryType,
    pub language: &'static str,
    pub country: &'static str,
    pub stay: Option<StayDetails>,
}

impl SearchParams {
    /// Builds parameters for a classified query
    ///
    /// Hotel searches check in a week from `today` for one night.
    pub fn new(query: impl Into<String>, query_type: QueryType, today: NaiveDate) -> Self {
        let stay = match query_type {
            QueryType::Hotel => Some(StayDetails {
                check_in: today + Days::new(HOTEL_CHECK_IN_OFFSET_DAYS),
                check_out: today + Days::new(HOTEL_CHECK_OUT_OFFSET_DAYS),
                adults: HOTEL_ADULTS,
                currency: HOTEL_CURRENCY,
            }),
            QueryType::Shopping => None,
        };

        Self {
            query: query.into(),
            query_type,
            language: LANGUAGE,
            country: COUNTRY,
            stay,
        }
    }

    /// Same parameters with a different query string
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Query-string pairs, excluding credentials
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("engine", self.query_type.engine().to_string()),
            ("q", self.query.clone()),
            ("hl", self.language.to_string()),
            ("gl", self.country.to_string()),
        ];

        if let Some(stay) = &self.stay {
            pairs.push(("check_in_date", stay.check_in.format("%Y-%m-%d").to_string()));
            pairs.push(("check_out_date", stay.check_out.format("%Y-%m-%d").to_string()));
            pairs.push(("adults", stay.adults.to_string()));
            pairs.push(("currency", stay.currency.to_string()));
        }

        pairs
    }
}

/// Trait for search data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs one search and returns the raw result records for its query type
    ///
    /// An empty list is a valid answer, not an error.
    async fn fetch_results(&self, params: &SearchParams) -> AppResult<Vec<Value>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shopping_params() {
        let params = SearchParams::new("iPhone 15 case", QueryType::Shopping, date(2024, 3, 1));
        assert_eq!(params.stay, None);
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("engine", "google_shopping".to_string()),
                ("q", "iPhone 15 case".to_string()),
                ("hl", "en".to_string()),
                ("gl", "us".to_string()),
            ]
        );
    }

    #[test]
    fn test_hotel_params_dates() {
        let params = SearchParams::new("resort in Miami", QueryType::Hotel, date(2024, 12, 28));
        let pairs = params.to_query_pairs();

        assert!(pairs.contains(&("engine", "google_hotels".to_string())));
        assert!(pairs.contains(&("check_in_date", "2025-01-04".to_string())));
        assert!(pairs.contains(&("check_out_date", "2025-01-05".to_string())));
        assert!(pairs.contains(&("adults", "2".to_string())));
        assert!(pairs.contains(&("currency", "USD".to_string())));
    }

    #[test]
    fn test_with_query_keeps_everything_else() {
        let params = SearchParams::new("marriott", QueryType::Hotel, date(2024, 5, 10));
        let fallback = params.with_query("hotels marriott");

        assert_eq!(fallback.query, "hotels marriott");
        assert_eq!(fallback.stay, params.stay);
        assert_eq!(fallback.query_type, params.query_type);
    }
}
