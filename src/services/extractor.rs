//! Maps raw SerpAPI records into the normalized result shapes.
//!
//! Extraction never fails: missing or malformed provider fields degrade to
//! empty strings and empty lists.

use serde_json::Value;

use crate::models::{
    serpapi::{decode_record, SerpHotelProperty, SerpShoppingItem},
    HotelResult, ShoppingResult,
};

/// Returns `primary` unless it is blank, in which case `fallback`
fn non_blank_or(primary: String, fallback: String) -> String {
    if primary.trim().is_empty() {
        fallback
    } else {
        primary
    }
}

impl From<SerpShoppingItem> for ShoppingResult {
    fn from(item: SerpShoppingItem) -> Self {
        Self {
            title: item.title,
            price: item.price,
            link: non_blank_or(item.link, item.product_link),
            source: item.source,
            thumbnail: item.thumbnail,
            tag: item.tag,
            delivery: item.delivery,
            rating: item.rating,
            reviews: item.reviews,
            extracted_price: item.extracted_price,
            old_price: item.extracted_price_old,
        }
    }
}

impl From<SerpHotelProperty> for HotelResult {
    fn from(property: SerpHotelProperty) -> Self {
        let images: Vec<String> = property
            .images
            .into_iter()
            .map(|image| image.thumbnail)
            .filter(|url| !url.trim().is_empty())
            .collect();

        let thumbnail = images
            .first()
            .cloned()
            .unwrap_or(property.thumbnail);

        Self {
            name: property.name,
            address: property.address,
            price: non_blank_or(property.rate_per_night.lowest, property.price),
            rating: non_blank_or(property.rating, property.overall_rating),
            reviews: property.reviews,
            thumbnail,
            link: property.link,
            images,
            amenities: property.amenities,
            booking_link: property.booking.link,
            booking_site: property.booking.name,
            city: property.location.city,
            state: property.location.state,
            country: property.location.country,
            description: property.description,
        }
    }
}

/// Normalizes `shopping_results` records
pub fn extract_shopping_results(records: &[Value]) -> Vec<ShoppingResult> {
    records
        .iter()
        .map(decode_record::<SerpShoppingItem>)
        .map(ShoppingResult::from)
        .collect()
}

/// Normalizes `properties` records from the hotels engine
pub fn extract_hotel_results(records: &[Value]) -> Vec<HotelResult> {
    records
        .iter()
        .map(decode_record::<SerpHotelProperty>)
        .map(HotelResult::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shopping_empty_input() {
        assert!(extract_shopping_results(&[]).is_empty());
    }

    #[test]
    fn test_shopping_record_missing_all_fields() {
        let results = extract_shopping_results(&[json!({})]);
        assert_eq!(results, vec![ShoppingResult::default()]);

        let value = serde_json::to_value(&results[0]).unwrap();
        for field in [
            "title",
            "price",
            "link",
            "source",
            "thumbnail",
            "tag",
            "delivery",
            "rating",
            "reviews",
            "extracted_price",
            "old_price",
        ] {
            assert_eq!(value[field], "", "field: {}", field);
        }
    }

    #[test]
    fn test_shopping_full_record() {
        let results = extract_shopping_results(&[json!({
            "title": "Nike Air Max 270",
            "price": "$89.99",
            "link": "https://nike.com/air-max-270",
            "source": "Nike",
            "thumbnail": "https://example.com/nike.jpg",
            "tag": "20% OFF",
            "delivery": "Free delivery by Mon",
            "rating": "4.5",
            "reviews": "1,234",
            "extracted_price": "89.99",
            "extracted_price_old": "112.99"
        })]);

        let result = &results[0];
        assert_eq!(result.title, "Nike Air Max 270");
        assert_eq!(result.link, "https://nike.com/air-max-270");
        assert_eq!(result.tag, "20% OFF");
        assert_eq!(result.old_price, "112.99");
    }

    #[test]
    fn test_shopping_link_falls_back_to_product_link() {
        let results = extract_shopping_results(&[
            json!({ "product_link": "https://google.com/shopping/product/1" }),
            json!({ "link": "", "product_link": "https://google.com/shopping/product/2" }),
            json!({ "link": "https://shop.example/3", "product_link": "https://ignored" }),
        ]);

        assert_eq!(results[0].link, "https://google.com/shopping/product/1");
        assert_eq!(results[1].link, "https://google.com/shopping/product/2");
        assert_eq!(results[2].link, "https://shop.example/3");
    }

    #[test]
    fn test_hotel_images_flattened() {
        let results = extract_hotel_results(&[json!({
            "name": "Grand Plaza Hotel",
            "images": [
                { "thumbnail": "" },
                { "thumbnail": "https://example.com/a.jpg" },
                { "original_image": "https://example.com/full.jpg" },
                { "thumbnail": "https://example.com/b.jpg" }
            ]
        })]);

        let hotel = &results[0];
        assert_eq!(hotel.thumbnail, "https://example.com/a.jpg");
        assert_eq!(
            hotel.images,
            vec![
                "https://example.com/a.jpg".to_string(),
                "https://example.com/b.jpg".to_string()
            ]
        );
    }

    #[test]
    fn test_hotel_without_images() {
        let results = extract_hotel_results(&[json!({ "name": "No Pictures Inn" })]);
        assert!(results[0].images.is_empty());
        assert_eq!(results[0].thumbnail, "");
    }

    #[test]
    fn test_hotel_nested_fields() {
        let results = extract_hotel_results(&[json!({
            "name": "Grand Plaza Hotel",
            "address": "123 Broadway, New York, NY 10001",
            "rate_per_night": { "lowest": "$299", "extracted_lowest": 299 },
            "overall_rating": 4.5,
            "reviews": 2847,
            "link": "https://grandplazahotel.com",
            "amenities": ["Free WiFi", "Pool", "Spa", "Restaurant"],
            "booking": { "link": "https://booking.com/grand-plaza", "name": "Booking.com" },
            "location": { "city": "New York", "state": "NY", "country": "USA" },
            "description": "Luxury hotel in the heart of Manhattan."
        })]);

        let hotel = &results[0];
        assert_eq!(hotel.price, "$299");
        assert_eq!(hotel.rating, "4.5");
        assert_eq!(hotel.reviews, "2847");
        assert_eq!(hotel.amenities.len(), 4);
        assert_eq!(hotel.booking_link, "https://booking.com/grand-plaza");
        assert_eq!(hotel.booking_site, "Booking.com");
        assert_eq!(hotel.city, "New York");
        assert_eq!(hotel.state, "NY");
        assert_eq!(hotel.country, "USA");
    }

    #[test]
    fn test_hotel_missing_everything() {
        let results = extract_hotel_results(&[json!({}), json!(null)]);
        assert_eq!(results, vec![HotelResult::default(), HotelResult::default()]);
    }

    #[test]
    fn test_hotel_single_amenity_string() {
        let results = extract_hotel_results(&[json!({ "amenities": "Pet friendly" })]);
        assert_eq!(results[0].amenities, vec!["Pet friendly".to_string()]);
    }
}
