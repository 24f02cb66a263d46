use thiserror::Error;

/// Ошибки генерации контента
///
/// Все варианты, кроме `EmptyIdea`, возникают уже после отправки запроса.
/// UI их только логирует: результат не показывается, кнопка снова активна.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Пустая идея: запрос не формируется
    #[error("idea must not be empty")]
    EmptyIdea,

    /// Запрос не удалось отправить или ответ не получен
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// Вебхук ответил статусом вне диапазона 2xx
    #[error("webhook responded with HTTP {0}")]
    HttpStatus(u16),

    /// Тело ответа не соответствует ожидаемому JSON
    #[error("malformed webhook response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GenerationError::NetworkFailure(_) | GenerationError::HttpStatus(_)
        )
    }
}
