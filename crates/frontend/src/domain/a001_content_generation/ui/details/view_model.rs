//! Content Generation - View Model

use crate::shared::clipboard::copy_to_clipboard;
use contracts::domain::a001_content_generation::{
    CopiedField, CopyIndicator, CopyTicket, GenerationError, GenerationRequest,
    GenerationResult, GenerationSession, COPY_FEEDBACK_MS,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ContentCreatorVm {
    pub session: RwSignal<GenerationSession>,
    pub copied: RwSignal<CopyIndicator>,
    /// Мемо поверх `session`: ввод идеи/контекста не перерисовывает результаты
    settled_result: Memo<Option<GenerationResult>>,
    loading: Memo<bool>,
    /// Запись в буфер обмена; в тестах подменяется
    clipboard: Callback<String>,
    /// Таймер сброса индикатора «скопировано»; drop отменяет его
    copy_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ContentCreatorVm {
    pub fn new() -> Self {
        Self::with_clipboard(Callback::new(|text: String| copy_to_clipboard(&text)))
    }

    pub fn with_clipboard(clipboard: Callback<String>) -> Self {
        let session = RwSignal::new(GenerationSession::new());
        Self {
            session,
            copied: RwSignal::new(CopyIndicator::new()),
            settled_result: Memo::new(move |_| session.with(|s| s.result().cloned())),
            loading: Memo::new(move |_| session.with(|s| s.is_loading())),
            clipboard,
            copy_timer: StoredValue::new_local(None),
        }
    }

    pub fn idea(&self) -> String {
        self.session.with(|s| s.idea.clone())
    }

    pub fn context(&self) -> String {
        self.session.with(|s| s.context.clone())
    }

    pub fn set_idea(&self, idea: String) {
        self.session.update(|s| s.idea = idea);
    }

    pub fn set_context(&self, context: String) {
        self.session.update(|s| s.context = context);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn can_submit(&self) -> bool {
        self.session.with(|s| s.can_submit())
    }

    pub fn result(&self) -> Option<GenerationResult> {
        self.settled_result.get()
    }

    pub fn is_copied(&self, field: CopiedField) -> bool {
        self.copied.with(|c| c.is_copied(field))
    }

    /// Idle -> Generating. `None` если идея пустая или запрос уже в полёте.
    pub fn begin_generation(&self) -> Option<GenerationRequest> {
        self.session
            .try_update(GenerationSession::begin_generation)
            .flatten()
    }

    /// Generating -> Settled. Ошибки только логируются, UI их не показывает.
    pub fn finish_generation(&self, outcome: Result<GenerationResult, GenerationError>) {
        match self.session.try_update(|s| s.settle(outcome)) {
            Some(Ok(())) => log::info!("Content generation settled"),
            Some(Err(e)) if e.is_transport() => log::error!("Content generation failed: {}", e),
            Some(Err(e)) => log::error!("Webhook returned unusable content: {}", e),
            None => log::warn!("Content generation finished after the page was disposed"),
        }
    }

    /// Скопировать поле результата и показать индикатор на `COPY_FEEDBACK_MS`
    pub fn copy(&self, field: CopiedField) {
        let Some(ticket) = self.mark_copied(field) else {
            return;
        };

        let vm = *self;
        let timer = Timeout::new(COPY_FEEDBACK_MS, move || vm.expire_copied(ticket));
        // Предыдущий таймер заменяется и тем самым отменяется
        self.copy_timer.update_value(|slot| *slot = Some(timer));
    }

    /// Записать текст поля в буфер обмена и включить индикатор.
    /// `None` если результата ещё нет.
    pub fn mark_copied(&self, field: CopiedField) -> Option<CopyTicket> {
        let text = self
            .session
            .with_untracked(|s| s.result().map(|r| r.text_for(field).to_owned()))?;

        self.clipboard.run(text);
        let ticket = self.copied.try_update(|c| c.mark(field))?;
        log::debug!("Copied {} to clipboard", field.as_str());
        Some(ticket)
    }

    /// Срабатывание таймера: гасит индикатор, только если билет последний
    pub fn expire_copied(&self, ticket: CopyTicket) {
        self.copied.try_update(|c| c.expire(ticket));
    }

    pub fn cancel_copy_timer(&self) {
        self.copy_timer.try_update_value(|slot| {
            slot.take();
        });
    }
}

impl Default for ContentCreatorVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn vm_with_recorder() -> (ContentCreatorVm, Arc<Mutex<Vec<String>>>) {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = written.clone();
        let vm = ContentCreatorVm::with_clipboard(Callback::new(move |text: String| {
            sink.lock().unwrap().push(text);
        }));
        (vm, written)
    }

    fn settled_vm() -> (ContentCreatorVm, Arc<Mutex<Vec<String>>>) {
        let (vm, written) = vm_with_recorder();
        vm.set_idea("idea".to_string());
        vm.begin_generation().unwrap();
        vm.finish_generation(Ok(GenerationResult {
            social_post: "A".into(),
            article: "B".into(),
        }));
        (vm, written)
    }

    #[test]
    fn test_empty_idea_is_not_dispatched() {
        let vm = ContentCreatorVm::new();
        assert!(vm.begin_generation().is_none());
        assert!(!vm.is_loading());
    }

    #[test]
    fn test_second_submit_while_loading_is_refused() {
        let vm = ContentCreatorVm::new();
        vm.set_idea("Leptos signals explained".to_string());

        assert!(vm.begin_generation().is_some());
        assert!(vm.is_loading());
        assert!(vm.begin_generation().is_none());
    }

    #[test]
    fn test_finish_with_mock_success() {
        let vm = ContentCreatorVm::new();
        vm.set_idea("idea".to_string());
        vm.begin_generation().unwrap();

        vm.finish_generation(Ok(GenerationResult {
            social_post: "A".into(),
            article: "B".into(),
        }));

        assert!(!vm.is_loading());
        let result = vm.result().unwrap();
        assert_eq!(result.social_post, "A");
        assert_eq!(result.article, "B");
    }

    #[test]
    fn test_finish_with_mock_network_failure() {
        let vm = ContentCreatorVm::new();
        vm.set_idea("idea".to_string());
        vm.set_context("context".to_string());
        vm.begin_generation().unwrap();

        vm.finish_generation(Err(GenerationError::NetworkFailure("offline".into())));

        assert!(!vm.is_loading());
        assert!(vm.result().is_none());
        assert!(vm.can_submit());
        assert_eq!(vm.context(), "context");
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let vm = ContentCreatorVm::new();
        vm.copy(CopiedField::Social);
        assert!(!vm.is_copied(CopiedField::Social));
    }

    #[test]
    fn test_whitespace_only_idea_is_dispatched() {
        let vm = ContentCreatorVm::new();
        vm.set_idea(" ".to_string());
        assert!(vm.can_submit());
        assert!(vm.begin_generation().is_some());
    }

    #[test]
    fn test_copy_writes_field_text_and_marks_indicator() {
        let (vm, written) = settled_vm();

        let ticket = vm.mark_copied(CopiedField::Article).unwrap();
        assert_eq!(*written.lock().unwrap(), vec!["B".to_string()]);
        assert!(vm.is_copied(CopiedField::Article));
        assert!(!vm.is_copied(CopiedField::Social));

        vm.expire_copied(ticket);
        assert!(!vm.is_copied(CopiedField::Article));
    }

    #[test]
    fn test_copy_twice_same_field_is_not_cut_short() {
        let (vm, written) = settled_vm();

        let first = vm.mark_copied(CopiedField::Social).unwrap();
        let second = vm.mark_copied(CopiedField::Social).unwrap();
        assert_eq!(written.lock().unwrap().len(), 2);

        // Таймер первого копирования срабатывает раньше второго
        vm.expire_copied(first);
        assert!(vm.is_copied(CopiedField::Social));

        vm.expire_copied(second);
        assert!(!vm.is_copied(CopiedField::Social));
    }

    #[test]
    fn test_copy_without_result_writes_nothing() {
        let (vm, written) = vm_with_recorder();
        assert!(vm.mark_copied(CopiedField::Social).is_none());
        assert!(written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_typing_does_not_rerun_result_consumers() {
        let (vm, _) = settled_vm();
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let results_panel = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            vm.result()
        });

        assert!(results_panel.get().is_some());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        vm.set_idea("next idea".to_string());
        vm.set_context("other tone".to_string());
        assert!(results_panel.get().is_some());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        vm.begin_generation().unwrap();
        vm.finish_generation(Ok(GenerationResult {
            social_post: "C".into(),
            article: "D".into(),
        }));
        assert_eq!(results_panel.get().unwrap().social_post, "C");
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
