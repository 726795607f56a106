//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collectible identifier as supplied by a caller.
///
/// Callers may pass either the collectible's UUID or its human-readable slug.
/// [`CollectibleId::alias_key`] folds both shapes onto the key the catalog is
/// indexed by, so `"5F0C…"` and `"5f0c…"` address the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectibleId(String);

impl CollectibleId {
    /// Create a new `CollectibleId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the collectible ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier parses as a UUID.
    #[must_use]
    pub fn is_uuid(&self) -> bool {
        Uuid::parse_str(self.0.trim()).is_ok()
    }

    /// Normalized lookup key.
    ///
    /// UUIDs are rendered in lowercase hyphenated form; slugs are trimmed and
    /// lowercased.
    #[must_use]
    pub fn alias_key(&self) -> String {
        let trimmed = self.0.trim();
        match Uuid::parse_str(trimmed) {
            Ok(uuid) => uuid.hyphenated().to_string(),
            Err(_) => trimmed.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for CollectibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CollectibleId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CollectibleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_alias_key_is_case_insensitive() {
        let upper = CollectibleId::from("5F0C2A7E-3B1D-4C55-9E0A-6D2B8F1C4A90");
        let lower = CollectibleId::from("5f0c2a7e-3b1d-4c55-9e0a-6d2b8f1c4a90");

        assert!(upper.is_uuid());
        assert_eq!(upper.alias_key(), lower.alias_key());
    }

    #[test]
    fn slug_alias_key_is_trimmed_and_lowercased() {
        let id = CollectibleId::from("  Charizard-Base-Set ");

        assert!(!id.is_uuid());
        assert_eq!(id.alias_key(), "charizard-base-set");
    }

    #[test]
    fn display_keeps_original_text() {
        let id = CollectibleId::from("Pikachu-Promo");
        assert_eq!(id.to_string(), "Pikachu-Promo");
    }
}
