//! Content Generation - Model (API functions)

use contracts::domain::a001_content_generation::{
    parse_webhook_response, GenerationError, GenerationRequest, GenerationResult,
};
use contracts::shared::client_config::ClientConfig;
use gloo_net::http::Request;

/// Отправить идею в вебхук и получить сгенерированные тексты
///
/// Ровно один POST на вызов, без ретраев и кэша.
pub async fn generate(
    config: &ClientConfig,
    request: &GenerationRequest,
) -> Result<GenerationResult, GenerationError> {
    let response = Request::post(&config.webhook_url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| GenerationError::NetworkFailure(format!("Failed to encode request: {}", e)))?
        .send()
        .await
        .map_err(|e| GenerationError::NetworkFailure(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GenerationError::NetworkFailure(e.to_string()))?;

    parse_webhook_response(status, &body)
}
