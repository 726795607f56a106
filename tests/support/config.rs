//! Config files for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

pub const CHARIZARD_ID: &str = "5f0c2a7e-3b1d-4c55-9e0a-6d2b8f1c4a90";
pub const PIKACHU_ID: &str = "0b9f6a64-7d7e-4f0e-8c9a-2f8a1e6c3d21";

/// Config pointing at a closed local port so every request fails fast.
pub const OFFLINE_TOML: &str = r#"
[logging]
level = "warn"

[marketplace]
data_url = "http://127.0.0.1:9/rest/v1"
lookup_url = "http://127.0.0.1:9/collectibles"

[marketplace.http]
timeout_ms = 500
connect_timeout_ms = 200
retry_max_attempts = 1
retry_backoff_ms = 0

[categories.vintage]
mode = "heuristic"
price_tolerance = "8"

[categories.promo]
mode = "specific-id"
target = "205537827685"

[[collectibles]]
id = "5f0c2a7e-3b1d-4c55-9e0a-6d2b8f1c4a90"
slug = "charizard-base"
fallback_price = "16.94"
category = "vintage"
name = "Charizard"
set_label = "Base Set"

[[collectibles]]
id = "0b9f6a64-7d7e-4f0e-8c9a-2f8a1e6c3d21"
slug = "pikachu-illustrator"
fallback_price = "120"
category = "promo"
price_table = "pikachu_promo_prices"
"#;

/// Write `contents` to a temporary `.toml` file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("pricedex-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

/// [`OFFLINE_TOML`] with `extra` appended.
pub fn offline_with(extra: &str) -> String {
    format!("{OFFLINE_TOML}\n{extra}")
}
