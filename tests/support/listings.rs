//! Realistic listing sets.

use pricedex::domain::RawListing;

pub fn offer(item_id: &str, price: &str, condition: &str, image: &str) -> RawListing {
    RawListing {
        image_ref: format!("https://i.ebayimg.com/images/g/{image}-s-l225.jpg"),
        item_ref: format!("https://api.ebay.com/buy/browse/v1/item/v1|{item_id}|0"),
        total_price: price.to_string(),
        seller_name: format!("seller-{item_id}"),
        condition_name: Some(condition.to_string()),
    }
}

/// Five offers around $17 with mixed conditions.
pub fn charizard_offers() -> Vec<RawListing> {
    vec![
        offer("301", "15.10", "Graded", "grey-slab"),
        offer("302", "17.25", "Ungraded", "fire-holo"),
        offer("303", "16.80", "Ungraded", "blue-sleeve"),
        offer("304", "44.00", "Ungraded", "fire-shadowless"),
        offer("205537827685", "99.00", "Ungraded", "promo"),
    ]
}
