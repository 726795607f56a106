//! Marketplace data source configuration.

use serde::Deserialize;

use crate::application::url::DEFAULT_LISTING_HOST;

/// HTTP client settings for marketplace requests.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Fixed delay between attempts in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    5000
}

const fn default_http_connect_timeout_ms() -> u64 {
    2000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for MarketplaceHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}

/// Marketplace endpoints and transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
    /// Base URL of the table-backed data API (e.g. `https://db.example.com/rest/v1`).
    #[serde(default)]
    pub data_url: String,
    /// Base URL of the generic per-collectible lookup API.
    #[serde(default)]
    pub lookup_url: String,
    /// Host used for canonical item links.
    #[serde(default = "default_listing_host")]
    pub listing_host: String,
    #[serde(default)]
    pub http: MarketplaceHttpConfig,
    /// API key sent as `apikey` and bearer token.
    ///
    /// Never read from the config file; loaded from `PRICEDEX_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_listing_host() -> String {
    DEFAULT_LISTING_HOST.to_string()
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            data_url: String::new(),
            lookup_url: String::new(),
            listing_host: default_listing_host(),
            http: MarketplaceHttpConfig::default(),
            api_key: None,
        }
    }
}
