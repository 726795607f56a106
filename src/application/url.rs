//! Canonical image and item links for marketplace listings.
//!
//! Both operations are total: anything they do not recognize is returned
//! unchanged.

/// Low-resolution suffixes and their replacement, tried in order.
const IMAGE_UPGRADES: &[(&str, &str)] = &[
    ("s-l64.jpg", "s-l1600.webp"),
    ("s-l140.jpg", "s-l1600.webp"),
    ("s-l225.jpg", "s-l1600.webp"),
    ("s-l300.jpg", "s-l1600.webp"),
    ("s-l500.jpg", "s-l1600.webp"),
    ("s-l640.jpg", "s-l1600.webp"),
    ("s-l1600.jpg", "s-l1600.webp"),
];

pub const DEFAULT_LISTING_HOST: &str = "www.ebay.com";

/// Replace the first known low-resolution suffix with the high-resolution one.
#[must_use]
pub fn upgrade_image(image_ref: &str) -> String {
    IMAGE_UPGRADES
        .iter()
        .find(|(low, _)| image_ref.contains(low))
        .map_or_else(
            || image_ref.to_string(),
            |(low, high)| image_ref.replacen(low, high, 1),
        )
}

/// Builds direct item links on a configured marketplace host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCanonicalizer {
    listing_host: String,
}

impl UrlCanonicalizer {
    pub fn new(listing_host: impl Into<String>) -> Self {
        Self {
            listing_host: listing_host.into(),
        }
    }

    #[must_use]
    pub fn listing_host(&self) -> &str {
        &self.listing_host
    }

    /// Turn a composite reference (`.../v1|<id>|<n>`) into `https://<host>/itm/<id>`.
    ///
    /// References without `|` are already direct links. Anything that does
    /// not have a numeric second segment is returned as-is.
    #[must_use]
    pub fn canonicalize_item_url(&self, item_ref: &str) -> String {
        self.item_id(item_ref).map_or_else(
            || item_ref.to_string(),
            |id| format!("https://{}/itm/{}", self.listing_host, id),
        )
    }

    fn item_id<'a>(&self, item_ref: &'a str) -> Option<&'a str> {
        if !item_ref.contains('|') {
            return None;
        }
        let last_segment = item_ref.rsplit('/').next()?;
        let mut parts = last_segment.split('|');
        let _version = parts.next()?;
        let id = parts.next()?;
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(id)
    }
}

impl Default for UrlCanonicalizer {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_HOST)
    }
}
