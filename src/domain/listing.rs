//! Marketplace listing types.
//!
//! - [`RawListing`] - One external offer exactly as the data source returned it
//! - [`ResolvedListing`] - The selected offer with canonical links, ready for display

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::text_or_number;

/// One marketplace offer under consideration.
///
/// Raw listings are never mutated; the selector only filters, scores and
/// picks among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    /// Image reference, often a low-resolution thumbnail.
    #[serde(alias = "image_url", alias = "imageRef")]
    pub image_ref: String,
    /// Composite item reference (`v1|<item id>|<sub index>`) or a direct URL.
    #[serde(alias = "item_url", alias = "item_id", alias = "itemRef")]
    pub item_ref: String,
    /// Total price including shipping, as text.
    #[serde(alias = "totalPrice", deserialize_with = "text_or_number")]
    pub total_price: String,
    #[serde(alias = "seller_username", alias = "sellerName")]
    pub seller_name: String,
    #[serde(default, alias = "condition", alias = "conditionName")]
    pub condition_name: Option<String>,
}

impl RawListing {
    /// Parsed total price, or `None` when the text is not a decimal.
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        let text = self.total_price.trim().trim_start_matches('$');
        Decimal::from_str(text).ok()
    }

    /// Absolute distance between this listing's price and `target`.
    #[must_use]
    pub fn distance_to(&self, target: Decimal) -> Option<Decimal> {
        self.price().map(|price| (price - target).abs())
    }

    /// Case-insensitive match on the condition label.
    #[must_use]
    pub fn has_condition(&self, label: &str) -> bool {
        self.condition_name
            .as_deref()
            .is_some_and(|condition| condition.trim().eq_ignore_ascii_case(label.trim()))
    }
}

/// The single selected listing returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedListing {
    pub image_url: String,
    pub external_url: String,
    pub total_price: String,
    pub seller_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn listing(price: &str, condition: Option<&str>) -> RawListing {
        RawListing {
            image_ref: "https://img.example/g/abc/s-l225.jpg".into(),
            item_ref: "v1|123456789|0".into(),
            total_price: price.into(),
            seller_name: "seller".into(),
            condition_name: condition.map(str::to_string),
        }
    }

    #[test]
    fn price_parses_plain_and_dollar_prefixed_text() {
        assert_eq!(listing("12.50", None).price(), Some(dec!(12.50)));
        assert_eq!(listing("$7.25", None).price(), Some(dec!(7.25)));
        assert_eq!(listing("n/a", None).price(), None);
    }

    #[test]
    fn distance_is_absolute() {
        let raw = listing("18", None);
        assert_eq!(raw.distance_to(dec!(20)), Some(dec!(2)));
        assert_eq!(listing("22", None).distance_to(dec!(20)), Some(dec!(2)));
    }

    #[test]
    fn condition_match_ignores_case_and_padding() {
        assert!(listing("1", Some("UNGRADED ")).has_condition("Ungraded"));
        assert!(!listing("1", Some("Used")).has_condition("Ungraded"));
        assert!(!listing("1", None).has_condition("Ungraded"));
    }

    #[test]
    fn deserializes_marketplace_field_names() {
        let json = r#"{
            "image_url": "https://img.example/a/s-l140.jpg",
            "item_id": "v1|205537827685|0",
            "total_price": 16.94,
            "seller_username": "cards4u",
            "condition": "Ungraded"
        }"#;

        let raw: RawListing = serde_json::from_str(json).unwrap();
        assert_eq!(raw.item_ref, "v1|205537827685|0");
        assert_eq!(raw.seller_name, "cards4u");
        assert_eq!(raw.total_price, "16.94");
        assert_eq!(raw.condition_name.as_deref(), Some("Ungraded"));
    }
}
