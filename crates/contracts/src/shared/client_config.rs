use serde::{Deserialize, Serialize};

/// Вебхук по умолчанию, если адрес не задан ни сервером, ни при сборке
pub const DEFAULT_WEBHOOK_URL: &str = "https://n8n.tu-instancia.com/webhook/content-creator";

/// Конфигурация клиента, которую бэкенд отдаёт по `GET /api/config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub webhook_url: String,
}

impl ClientConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    /// Взять адрес, если он непустой, иначе `DEFAULT_WEBHOOK_URL`
    pub fn or_default_url(url: Option<&str>) -> Self {
        match url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WEBHOOK_URL)
    }
}
