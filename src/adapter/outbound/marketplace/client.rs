//! Marketplace REST client.
//!
//! Supports two API surfaces:
//! - **Data API**: PostgREST-style tables holding listings, price snapshots
//!   and price history, addressed by the table names in each collectible's
//!   configuration
//! - **Lookup API**: `GET {lookup_url}/{id}` returning `current_price` for
//!   collectibles with no configuration

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::dto::{HistoryRow, LookupRecord};
use super::settings::MarketplaceConfig;
use crate::domain::{PricePoint, PriceSnapshot, RawListing};
use crate::error::{Error, Result};
use crate::port::outbound::{FallbackPriceSource, MarketDataSource};

/// HTTP client for the marketplace data and lookup APIs.
pub struct MarketplaceClient {
    http: HttpClient,
    data_url: String,
    lookup_url: String,
    api_key: Option<String>,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl MarketplaceClient {
    /// Client with default transport settings and no retries.
    #[must_use]
    pub fn new(data_url: impl Into<String>, lookup_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            data_url: data_url.into(),
            lookup_url: lookup_url.into(),
            api_key: None,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &MarketplaceConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            data_url: config.data_url.clone(),
            lookup_url: config.lookup_url.clone(),
            api_key: config.api_key.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        }
    }

    /// Send `apikey` and bearer headers with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `{data_url}/{table}?select=*` plus extra query pairs.
    fn table_url(&self, table: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.data_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("data_url cannot be a base: {}", self.data_url)))?
            .pop_if_empty()
            .push(table);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn lookup_item_url(&self, collectible_id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.lookup_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("lookup_url cannot be a base: {}", self.lookup_url)))?
            .pop_if_empty()
            .push(collectible_id);
        Ok(url)
    }

    async fn get_with_retry<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let mut request = self.http.get(url.clone());
            if let Some(key) = &self.api_key {
                request = request.header("apikey", key).bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl MarketDataSource for MarketplaceClient {
    async fn listings(&self, table: &str) -> Result<Vec<RawListing>> {
        let url = self.table_url(table, &[])?;
        debug!(url = %url, "Fetching listings");

        let listings: Vec<RawListing> = self.get_with_retry(url).await?;
        debug!(table, count = listings.len(), "Fetched listings");
        Ok(listings)
    }

    async fn latest_snapshot(&self, table: &str) -> Result<Option<PriceSnapshot>> {
        let url = self.table_url(table, &[("order", "created_at.desc"), ("limit", "1")])?;
        debug!(url = %url, "Fetching latest price snapshot");

        let rows: Vec<PriceSnapshot> = self.get_with_retry(url).await?;
        Ok(rows.into_iter().next())
    }

    async fn price_history(&self, table: &str, limit: usize) -> Result<Vec<PricePoint>> {
        let limit = limit.to_string();
        // Newest N, then flipped so callers get them oldest first.
        let url = self.table_url(table, &[("order", "created_at.desc"), ("limit", &limit)])?;
        debug!(url = %url, "Fetching price history");

        let rows: Vec<HistoryRow> = self.get_with_retry(url).await?;
        let total = rows.len();
        let points: Vec<PricePoint> = rows
            .into_iter()
            .rev()
            .filter_map(HistoryRow::into_point)
            .collect();
        if points.len() < total {
            debug!(table, skipped = total - points.len(), "Skipped unparsable history rows");
        }
        Ok(points)
    }

    fn source_name(&self) -> &'static str {
        "marketplace"
    }
}

#[async_trait]
impl FallbackPriceSource for MarketplaceClient {
    async fn current_price(&self, collectible_id: &str) -> Result<Option<Decimal>> {
        let url = self.lookup_item_url(collectible_id)?;
        debug!(url = %url, "Looking up unconfigured collectible");

        let record: LookupRecord = self.get_with_retry(url).await?;
        Ok(record.price())
    }
}
