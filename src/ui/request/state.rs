//! State for the summarization request.

use crate::prompt::SummaryLength;
use crate::ui::mvi::UiState;
use crate::ui::text_buffer::TextBuffer;

/// Validation message for blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to summarize.";

/// Where the request currently stands.
///
/// Summary and error live in different variants, so they can never be shown
/// together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestPhase {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// One call is in flight.
    Loading {
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The last call produced a summary.
    Success { summary: String },

    /// Validation failed or the last call failed.
    Error { message: String },
}

/// Complete request state owned by the app.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestState {
    pub input: TextBuffer,
    pub length: SummaryLength,
    pub phase: RequestPhase,
}

impl UiState for RequestState {}

impl RequestState {
    pub fn new(length: SummaryLength) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        self.input.as_str()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn summary_text(&self) -> Option<&str> {
        match &self.phase {
            RequestPhase::Success { summary } => Some(summary),
            _ => None,
        }
    }

    /// Whether the submit control should be shown as enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.is_blank()
    }

    pub fn animation_tick(&self) -> u8 {
        match self.phase {
            RequestPhase::Loading { animation_tick } => animation_tick,
            _ => 0,
        }
    }
}
