//! Copy-to-clipboard confirmation.
//!
//! Purely local to the summary panel: it never touches the request state.

use std::time::{Duration, Instant};

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CopyFeedbackState {
    #[default]
    Idle,
    /// Summary was copied; confirmation shown until `until`.
    Copied { until: Instant },
    /// Clipboard write failed; message shown until `until`.
    Failed { message: String, until: Instant },
}

impl UiState for CopyFeedbackState {}

impl CopyFeedbackState {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CopyIntent {
    Copied { now: Instant, hold: Duration },
    Failed { message: String, now: Instant, hold: Duration },
    Reset,
    Tick { now: Instant },
}

impl Intent for CopyIntent {}

pub struct CopyReducer;

impl Reducer for CopyReducer {
    type State = CopyFeedbackState;
    type Intent = CopyIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CopyIntent::Copied { now, hold } => CopyFeedbackState::Copied { until: now + hold },
            CopyIntent::Failed { message, now, hold } => CopyFeedbackState::Failed {
                message,
                until: now + hold,
            },
            CopyIntent::Reset => CopyFeedbackState::Idle,
            CopyIntent::Tick { now } => match state {
                CopyFeedbackState::Copied { until } | CopyFeedbackState::Failed { until, .. }
                    if now >= until =>
                {
                    CopyFeedbackState::Idle
                }
                other => other,
            },
        }
    }
}
