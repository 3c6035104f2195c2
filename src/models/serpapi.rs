//! Raw SerpAPI record shapes.
//!
//! The provider's payload is not contractually stable, so every field is
//! optional and decoded leniently: a field of the wrong shape falls back to
//! its default instead of failing the whole record.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Renders a JSON scalar as text; non-scalars become empty
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

fn lenient_struct<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_default())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .iter()
            .filter(|item| item.is_string() || item.is_number())
            .map(scalar_to_string)
            .collect(),
        _ => Vec::new(),
    })
}

/// Decodes a record, falling back to the all-defaults record
pub fn decode_record<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    T::deserialize(value).unwrap_or_default()
}

/// One entry of `shopping_results` from the `google_shopping` engine
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpShoppingItem {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(deserialize_with = "lenient_string")]
    pub product_link: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tag: String,
    #[serde(deserialize_with = "lenient_string")]
    pub delivery: String,
    #[serde(deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reviews: String,
    #[serde(deserialize_with = "lenient_string")]
    pub extracted_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub extracted_price_old: String,
}

/// One entry of `properties` from the `google_hotels` engine
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpHotelProperty {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(deserialize_with = "lenient_struct")]
    pub rate_per_night: SerpRate,
    #[serde(deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(deserialize_with = "lenient_string")]
    pub overall_rating: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reviews: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(deserialize_with = "lenient_vec")]
    pub images: Vec<SerpImage>,
    #[serde(deserialize_with = "string_or_list")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "lenient_struct")]
    pub booking: SerpBooking,
    #[serde(deserialize_with = "lenient_struct")]
    pub location: SerpLocation,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpRate {
    #[serde(deserialize_with = "lenient_string")]
    pub lowest: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpImage {
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpBooking {
    #[serde(deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SerpLocation {
    #[serde(deserialize_with = "lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string")]
    pub country: String,
}
