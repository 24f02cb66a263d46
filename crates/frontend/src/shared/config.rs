//! Startup configuration for the client
//!
//! Order: `GET /api/config` from the backend, then the `CONTENT_WEBHOOK_URL`
//! value baked in at build time, then the hardcoded default.

use crate::shared::api_utils::api_url;
use contracts::shared::client_config::ClientConfig;
use gloo_net::http::Request;

/// Webhook URL captured when the wasm bundle was built
pub fn build_time_config() -> ClientConfig {
    ClientConfig::or_default_url(option_env!("CONTENT_WEBHOOK_URL"))
}

/// Fetch the client config from the backend
pub async fn fetch_client_config() -> Result<ClientConfig, String> {
    let response = Request::get(&api_url("/api/config"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Never fails: falls back to the build-time value when the backend is unreachable
pub async fn load_client_config() -> ClientConfig {
    match fetch_client_config().await {
        Ok(config) => {
            log::info!("Loaded client config, webhook: {}", config.webhook_url);
            config
        }
        Err(e) => {
            let config = build_time_config();
            log::warn!(
                "Could not load /api/config ({}), using webhook {}",
                e,
                config.webhook_url
            );
            config
        }
    }
}
