use crate::models::QueryType;

/// Lodging words that mark a query as a hotel search
pub const HOTEL_KEYWORDS: [&str; 20] = [
    "hotel",
    "motel",
    "resort",
    "inn",
    "lodge",
    "lodging",
    "hostel",
    "stay",
    "booking",
    "accommodation",
    "bed and breakfast",
    "b&b",
    "vacation rental",
    "airbnb",
    "guesthouse",
    "guest house",
    "villa",
    "cabin rental",
    "check-in",
    "suites",
];

/// Hotel chains whose name alone implies a hotel search
pub const HOTEL_BRANDS: [&str; 16] = [
    "marriott",
    "hilton",
    "hyatt",
    "sheraton",
    "westin",
    "holiday inn",
    "radisson",
    "wyndham",
    "best western",
    "four seasons",
    "ritz-carlton",
    "intercontinental",
    "doubletree",
    "hampton inn",
    "embassy suites",
    "la quinta",
];

/// Routes a free-text query to hotel or shopping search.
///
/// Matching is case-insensitive substring containment with no tokenization,
/// so "spinning top" is a hotel query because it contains "inn".
pub fn classify(query: &str) -> QueryType {
    let query = query.to_lowercase();

    let is_hotel = HOTEL_KEYWORDS
        .iter()
        .chain(HOTEL_BRANDS.iter())
        .any(|needle| query.contains(needle));

    if is_hotel {
        QueryType::Hotel
    } else {
        QueryType::Shopping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_queries() {
        assert_eq!(classify("Nike sneakers under $100"), QueryType::Shopping);
        assert_eq!(classify("iPhone 15 case"), QueryType::Shopping);
        assert_eq!(classify("laptop bag"), QueryType::Shopping);
        assert_eq!(classify(""), QueryType::Shopping);
    }

    #[test]
    fn test_hotel_keyword_queries() {
        assert_eq!(classify("Hotels in Salt Lake City"), QueryType::Hotel);
        assert_eq!(classify("motels under $200"), QueryType::Hotel);
        assert_eq!(classify("resort in Miami"), QueryType::Hotel);
        assert_eq!(classify("bed and breakfast in Vermont"), QueryType::Hotel);
        assert_eq!(classify("vacation rental in Hawaii"), QueryType::Hotel);
    }

    #[test]
    fn test_hotel_brand_queries() {
        assert_eq!(classify("Marriott downtown Chicago"), QueryType::Hotel);
        assert_eq!(classify("HILTON near LAX"), QueryType::Hotel);
        assert_eq!(classify("Ritz-Carlton Naples"), QueryType::Hotel);
    }

    #[test]
    fn test_substring_not_token_matching() {
        assert_eq!(classify("Inn-spired Jacket"), QueryType::Hotel);
        assert_eq!(classify("spinning top"), QueryType::Hotel);
    }

    #[test]
    fn test_every_listed_term_classifies_as_hotel() {
        for term in HOTEL_KEYWORDS.iter().chain(HOTEL_BRANDS.iter()) {
            let query = format!("cheap {} deals", term.to_uppercase());
            assert_eq!(classify(&query), QueryType::Hotel, "term: {}", term);
        }
    }
}
