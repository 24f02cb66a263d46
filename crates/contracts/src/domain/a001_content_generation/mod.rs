//! Генерация контента через внешний вебхук (n8n workflow)
//!
//! - dto.rs: wire-структуры запроса/ответа и маппинг ответа
//! - error.rs: таксономия ошибок генерации
//! - lifecycle.rs: состояние формы и индикатор копирования

pub mod dto;
pub mod error;
pub mod lifecycle;

pub use dto::{parse_webhook_response, CopiedField, GenerationRequest, GenerationResult, WebhookResponse};
pub use error::GenerationError;
pub use lifecycle::{CopyIndicator, CopyTicket, GenerationSession, COPY_FEEDBACK_MS};
