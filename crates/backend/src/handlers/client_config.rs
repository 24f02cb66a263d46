use axum::{extract::State, Json};
use contracts::shared::client_config::ClientConfig;
use std::sync::Arc;

use crate::shared::config::Config;

/// GET /api/config
pub async fn get_client_config(State(config): State<Arc<Config>>) -> Json<ClientConfig> {
    Json(config.client_config())
}
