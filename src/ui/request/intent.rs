//! Intents for the summarization request.

use crate::prompt::SummaryLength;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the request reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestIntent {
    /// Typed character (including `'\n'`).
    InsertChar(char),

    /// Pasted text.
    InsertText(String),

    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorLineStart,
    CursorLineEnd,

    /// Empty the text area.
    ClearInput,

    /// Pick a specific length.
    SelectLength(SummaryLength),

    /// Step through lengths.
    CycleLength {
        forward: bool,
    },

    /// User asked for a summary.
    Submit,

    /// The in-flight request finished.
    Completed {
        /// Summary text, or the user-facing error message.
        result: Result<String, String>,
    },

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for RequestIntent {}
