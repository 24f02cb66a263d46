use super::dto::{CopiedField, GenerationRequest, GenerationResult};
use super::error::GenerationError;

/// Длительность индикатора «скопировано», мс
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Фаза запроса генерации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
    /// Запрос завершён (успешно или нет); для повторной отправки равносильно `Idle`
    Settled,
}

/// Состояние формы генерации
///
/// Single-flight: пока запрос в полёте, `begin_generation` ничего не отдаёт.
/// Результат меняется только при успешном ответе.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSession {
    pub idea: String,
    pub context: String,
    phase: GenerationPhase,
    result: Option<GenerationResult>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GenerationPhase::Generating
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.idea.is_empty()
    }

    /// Перейти в `Generating` и вернуть запрос для отправки.
    /// `None` если идея пустая или предыдущий запрос ещё не завершён.
    pub fn begin_generation(&mut self) -> Option<GenerationRequest> {
        if self.is_loading() {
            return None;
        }
        let context = (!self.context.is_empty()).then(|| self.context.clone());
        let request = GenerationRequest::new(self.idea.clone(), context).ok()?;
        self.phase = GenerationPhase::Generating;
        Some(request)
    }

    /// Применить исход запроса. Ошибка возвращается вызывающему для логирования.
    ///
    /// Исход, пришедший вне фазы `Generating`, отбрасывается.
    pub fn settle(
        &mut self,
        outcome: Result<GenerationResult, GenerationError>,
    ) -> Result<(), GenerationError> {
        if !self.is_loading() {
            return Ok(());
        }
        self.phase = GenerationPhase::Settled;
        let result = outcome?;
        self.result = Some(result);
        Ok(())
    }
}

/// Номер последнего копирования; сбросить индикатор может только его таймер
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CopyTicket(u64);

/// Индикатор «скопировано», не зависит от фазы генерации
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    field: Option<CopiedField>,
    issued: u64,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self, field: CopiedField) -> bool {
        self.field == Some(field)
    }

    /// Показать индикатор для поля и выдать билет для таймера сброса
    pub fn mark(&mut self, field: CopiedField) -> CopyTicket {
        self.issued += 1;
        self.field = Some(field);
        CopyTicket(self.issued)
    }

    /// Сбросить индикатор, если билет последний. Возвращает, был ли сброс.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.field = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_idea(idea: &str) -> GenerationSession {
        let mut session = GenerationSession::new();
        session.idea = idea.to_string();
        session
    }

    fn sample_result() -> GenerationResult {
        GenerationResult {
            social_post: "A".into(),
            article: "B".into(),
        }
    }

    #[test]
    fn test_empty_idea_does_not_dispatch() {
        let mut session = session_with_idea("");
        assert!(!session.can_submit());
        assert_eq!(session.begin_generation(), None);
        assert_eq!(session.phase, GenerationPhase::Idle);
    }

    #[test]
    fn test_whitespace_only_idea_is_dispatched() {
        let mut session = session_with_idea(" ");
        assert!(session.can_submit());
        let request = session.begin_generation().unwrap();
        assert_eq!(request.idea, " ");
        assert!(session.is_loading());
    }

    #[test]
    fn test_copy_feedback_window_is_two_seconds() {
        assert_eq!(COPY_FEEDBACK_MS, 2000);
    }

    #[test]
    fn test_single_flight_guard() {
        let mut session = session_with_idea("post about Leptos");
        session.context = "friendly tone".into();

        let first = session.begin_generation().unwrap();
        assert_eq!(first.idea, "post about Leptos");
        assert_eq!(first.context, "friendly tone");
        assert!(session.is_loading());
        assert!(!session.can_submit());

        assert_eq!(session.begin_generation(), None);
        assert!(session.is_loading());
    }

    #[test]
    fn test_success_populates_result() {
        let mut session = session_with_idea("idea");
        session.begin_generation().unwrap();

        assert_eq!(session.settle(Ok(sample_result())), Ok(()));
        assert!(!session.is_loading());
        assert_eq!(session.phase, GenerationPhase::Settled);
        assert_eq!(session.result(), Some(&sample_result()));
    }

    #[test]
    fn test_failure_leaves_result_unset() {
        let mut session = session_with_idea("idea");
        session.begin_generation().unwrap();

        let err = GenerationError::NetworkFailure("offline".into());
        assert_eq!(session.settle(Err(err.clone())), Err(err));
        assert!(!session.is_loading());
        assert_eq!(session.result(), None);
        assert!(session.can_submit());
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut session = session_with_idea("idea");
        session.begin_generation().unwrap();
        session.settle(Ok(sample_result())).unwrap();

        session.begin_generation().unwrap();
        let _ = session.settle(Err(GenerationError::HttpStatus(503)));
        assert_eq!(session.result(), Some(&sample_result()));
    }

    #[test]
    fn test_settled_allows_new_request() {
        let mut session = session_with_idea("idea");
        session.begin_generation().unwrap();
        session.settle(Ok(sample_result())).unwrap();

        assert!(session.begin_generation().is_some());
        assert!(session.is_loading());
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut session = session_with_idea("idea");
        assert_eq!(session.settle(Ok(sample_result())), Ok(()));
        assert_eq!(session.result(), None);
        assert_eq!(session.phase, GenerationPhase::Idle);
    }

    #[test]
    fn test_copy_indicator_expires() {
        let mut indicator = CopyIndicator::new();
        let ticket = indicator.mark(CopiedField::Article);
        assert_eq!(indicator.field, Some(CopiedField::Article));
        assert!(indicator.is_copied(CopiedField::Article));
        assert!(!indicator.is_copied(CopiedField::Social));

        assert!(indicator.expire(ticket));
        assert_eq!(indicator.field, None);
    }

    #[test]
    fn test_repeated_copy_is_not_cut_short() {
        let mut indicator = CopyIndicator::new();
        let first = indicator.mark(CopiedField::Social);
        let second = indicator.mark(CopiedField::Social);

        // Таймер первого копирования не должен гасить второе
        assert!(!indicator.expire(first));
        assert_eq!(indicator.field, Some(CopiedField::Social));

        assert!(indicator.expire(second));
        assert_eq!(indicator.field, None);
    }

    #[test]
    fn test_copy_twice_in_sequence_resets_between() {
        let mut indicator = CopyIndicator::new();
        let first = indicator.mark(CopiedField::Article);
        assert!(indicator.expire(first));
        assert_eq!(indicator.field, None);

        let second = indicator.mark(CopiedField::Article);
        assert_eq!(indicator.field, Some(CopiedField::Article));
        assert!(indicator.expire(second));
        assert_eq!(indicator.field, None);
        assert!(second > first);
    }

    #[test]
    fn test_switching_field_moves_indicator() {
        let mut indicator = CopyIndicator::new();
        let social = indicator.mark(CopiedField::Social);
        let article = indicator.mark(CopiedField::Article);
        assert!(!indicator.expire(social));
        assert_eq!(indicator.field, Some(CopiedField::Article));
        assert!(indicator.expire(article));
    }
}
