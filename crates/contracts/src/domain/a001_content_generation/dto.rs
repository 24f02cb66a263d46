use super::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Тело запроса к вебхуку генерации
///
/// На проводе поле контекста называется `contexto`, так его ждёт workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub idea: String,
    #[serde(rename = "contexto", default)]
    pub context: String,
}

impl GenerationRequest {
    /// Создать запрос; отклоняется только пустая строка.
    /// Текст уходит в вебхук как есть, без обрезки.
    pub fn new(
        idea: impl Into<String>,
        context: Option<String>,
    ) -> Result<Self, GenerationError> {
        let idea = idea.into();
        if idea.is_empty() {
            return Err(GenerationError::EmptyIdea);
        }
        Ok(Self {
            idea,
            context: context.unwrap_or_default(),
        })
    }
}

/// Ответ вебхука в том виде, в каком его отдаёт workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub linkedin_post: String,
    pub blog_post: String,
}

/// Результат генерации для отображения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub social_post: String,
    pub article: String,
}

impl GenerationResult {
    pub fn text_for(&self, field: CopiedField) -> &str {
        match field {
            CopiedField::Social => &self.social_post,
            CopiedField::Article => &self.article,
        }
    }
}

impl From<WebhookResponse> for GenerationResult {
    fn from(value: WebhookResponse) -> Self {
        Self {
            social_post: value.linkedin_post,
            article: value.blog_post,
        }
    }
}

/// Поле результата, которое было скопировано в буфер обмена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopiedField {
    Social,
    Article,
}

impl CopiedField {
    pub fn as_str(&self) -> &str {
        match self {
            CopiedField::Social => "social",
            CopiedField::Article => "article",
        }
    }
}

/// Разобрать ответ вебхука по статусу и сырому телу
///
/// Отсутствие любого из двух полей считается `MalformedResponse`.
pub fn parse_webhook_response(
    status: u16,
    body: &str,
) -> Result<GenerationResult, GenerationError> {
    if !(200..300).contains(&status) {
        return Err(GenerationError::HttpStatus(status));
    }

    let response: WebhookResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    Ok(response.into())
}
