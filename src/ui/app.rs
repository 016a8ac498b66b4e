use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::prompt::SummaryLength;
use crate::summarizer::{Summarizer, UNKNOWN_ERROR_MESSAGE};
use crate::ui::copy::{CopyFeedbackState, CopyIntent, CopyReducer};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::request::{RequestIntent, RequestReducer, RequestState};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Length,
    Submit,
    Copy,
}

/// Startup settings derived from config and CLI overrides.
#[derive(Clone, Debug)]
pub struct AppSettings {
    pub default_length: SummaryLength,
    pub copy_feedback: Duration,
    /// Provider / model shown in the header.
    pub model_label: String,
    /// False when no API key was resolved; shown as a header warning.
    pub credential_configured: bool,
}

impl AppSettings {
    pub fn from_config(config: &Config, credential_configured: bool) -> Self {
        Self {
            default_length: config.ui.default_length,
            copy_feedback: Duration::from_millis(config.ui.copy_feedback_ms),
            model_label: format!(
                "{} · {}",
                config.api.provider.display_name(),
                config.api.model()
            ),
            credential_configured,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    settings: AppSettings,
    /// Request state (MVI pattern).
    request: RequestState,
    /// Copy confirmation (MVI pattern).
    copy_feedback: CopyFeedbackState,
    summarizer: Arc<dyn Summarizer>,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        settings: AppSettings,
        summarizer: Arc<dyn Summarizer>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            request: RequestState::new(settings.default_length),
            settings,
            copy_feedback: CopyFeedbackState::default(),
            summarizer,
            clipboard: None,
            runtime,
            events,
        }
    }

    pub fn set_clipboard(&mut self, clipboard: Box<dyn ClipboardWriter>) {
        self.clipboard = Some(clipboard);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn copy_feedback(&self) -> &CopyFeedbackState {
        &self.copy_feedback
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Copy && self.request.summary_text().is_none() {
            return;
        }
        self.focus = focus;
    }

    /// Tab order; the copy control only takes part when a summary exists.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Length,
            Focus::Length => Focus::Submit,
            Focus::Submit if self.request.summary_text().is_some() => Focus::Copy,
            Focus::Submit | Focus::Copy => Focus::Input,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Input if self.request.summary_text().is_some() => Focus::Copy,
            Focus::Input => Focus::Submit,
            Focus::Length => Focus::Input,
            Focus::Submit => Focus::Length,
            Focus::Copy => Focus::Submit,
        };
    }

    /// Dispatch an intent to the request reducer.
    pub fn dispatch_request(&mut self, intent: RequestIntent) {
        dispatch_mvi!(self, request, RequestReducer, intent);
        if self.focus == Focus::Copy && self.request.summary_text().is_none() {
            self.focus = Focus::Input;
        }
    }

    fn dispatch_copy(&mut self, intent: CopyIntent) {
        dispatch_mvi!(self, copy_feedback, CopyReducer, intent);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.focus = Focus::Input;
        self.dispatch_request(RequestIntent::InsertText(text.to_string()));
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.request.is_loading() {
            self.dispatch_request(RequestIntent::AnimationTick);
        }
        self.dispatch_copy(CopyIntent::Tick { now });
    }

    /// Ask for a summary of the current input.
    ///
    /// Returns true when a request was started. Blank input ends in the
    /// validation error and a submit during loading is ignored; neither
    /// reaches the summarizer.
    pub fn submit(&mut self) -> bool {
        let was_loading = self.request.is_loading();
        self.dispatch_request(RequestIntent::Submit);
        if was_loading || !self.request.is_loading() {
            return false;
        }

        self.dispatch_copy(CopyIntent::Reset);
        self.spawn_summarize();
        true
    }

    fn spawn_summarize(&self) {
        let text = self.request.input_text().to_string();
        let length = self.request.length;
        let summarizer = Arc::clone(&self.summarizer);
        let events = self.events.clone();

        tracing::info!(
            length = %length,
            input_chars = text.chars().count(),
            "Starting summarization"
        );

        self.runtime.spawn(async move {
            // Inner task so a panicking summarizer still produces an outcome.
            let task = tokio::spawn(async move { summarizer.summarize(&text, length).await });
            let result = match task.await {
                Ok(Ok(summary)) => Ok(summary),
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "Summarization failed");
                    Err(err.user_message())
                }
                Err(err) => {
                    tracing::error!(error = %err, "Summarization task did not complete");
                    Err(UNKNOWN_ERROR_MESSAGE.to_string())
                }
            };
            if events.send(AppEvent::SummaryReady(result)).is_err() {
                tracing::debug!("UI closed before summarization finished");
            }
        });
    }

    pub fn on_summary_ready(&mut self, result: Result<String, String>) {
        self.dispatch_request(RequestIntent::Completed { result });
    }

    /// Copy the summary to the clipboard. No-op without a summary.
    pub fn copy_summary(&mut self, now: Instant) {
        let Some(summary) = self.request.summary_text().map(str::to_string) else {
            return;
        };
        let hold = self.settings.copy_feedback;

        let outcome = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(&summary),
            None => Err("Clipboard unavailable".to_string()),
        };

        match outcome {
            Ok(()) => self.dispatch_copy(CopyIntent::Copied { now, hold }),
            Err(message) => {
                tracing::warn!(error = %message, "Copy to clipboard failed");
                self.dispatch_copy(CopyIntent::Failed { message, now, hold });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::SummarizeError;
    use async_trait::async_trait;

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _length: SummaryLength,
        ) -> Result<String, SummarizeError> {
            Err(SummarizeError::EmptyResponse)
        }
    }

    fn make_app(runtime: &tokio::runtime::Runtime) -> (App, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let settings = AppSettings {
            default_length: SummaryLength::Short,
            copy_feedback: Duration::from_secs(2),
            model_label: "Test · model".to_string(),
            credential_configured: true,
        };
        let app = App::new(settings, Arc::new(FailingSummarizer), runtime.handle().clone(), tx);
        (app, rx)
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn starts_idle_with_configured_length() {
        let rt = runtime();
        let (app, _rx) = make_app(&rt);
        assert_eq!(app.request().length, SummaryLength::Short);
        assert_eq!(app.focus(), Focus::Input);
        assert!(!app.should_quit());
    }

    #[test]
    fn copy_focus_requires_summary() {
        let rt = runtime();
        let (mut app, _rx) = make_app(&rt);
        app.set_focus(Focus::Copy);
        assert_eq!(app.focus(), Focus::Input);

        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus(), Focus::Submit);
        app.focus_next();
        assert_eq!(app.focus(), Focus::Input);
        app.focus_prev();
        assert_eq!(app.focus(), Focus::Submit);
    }

    #[test]
    fn blank_submit_never_reaches_summarizer() {
        let rt = runtime();
        let (mut app, rx) = make_app(&rt);
        app.on_paste("   ");
        assert!(!app.submit());
        assert!(app.request().error_message().is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn copy_without_summary_is_noop() {
        let rt = runtime();
        let (mut app, _rx) = make_app(&rt);
        app.copy_summary(Instant::now());
        assert_eq!(app.copy_feedback(), &CopyFeedbackState::Idle);
    }

    #[test]
    fn copy_without_clipboard_reports_failure() {
        let rt = runtime();
        let (mut app, _rx) = make_app(&rt);
        app.on_paste("article");
        app.dispatch_request(RequestIntent::Submit);
        app.on_summary_ready(Ok("summary".into()));

        app.copy_summary(Instant::now());
        assert_eq!(app.copy_feedback().failure(), Some("Clipboard unavailable"));
        assert_eq!(app.request().summary_text(), Some("summary"));
    }
}
