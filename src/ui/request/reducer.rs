//! Reducer for the summarization request.

use crate::ui::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::{RequestPhase, RequestState, EMPTY_INPUT_MESSAGE};

/// Reducer for request state transitions.
pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Editing stays available while a request is in flight.
            RequestIntent::InsertChar(ch) => state.input.insert_char(ch),
            RequestIntent::InsertText(text) => state.input.insert_str(&text),
            RequestIntent::Backspace => state.input.backspace(),
            RequestIntent::Delete => state.input.delete(),
            RequestIntent::CursorLeft => state.input.move_left(),
            RequestIntent::CursorRight => state.input.move_right(),
            RequestIntent::CursorLineStart => state.input.move_line_start(),
            RequestIntent::CursorLineEnd => state.input.move_line_end(),
            RequestIntent::ClearInput => state.input.clear(),

            RequestIntent::SelectLength(length) => state.length = length,
            RequestIntent::CycleLength { forward } => {
                state.length = if forward {
                    state.length.next()
                } else {
                    state.length.prev()
                };
            }

            RequestIntent::Submit => {
                if state.is_loading() {
                    return state;
                }
                state.phase = if state.input.is_blank() {
                    RequestPhase::Error {
                        message: EMPTY_INPUT_MESSAGE.to_string(),
                    }
                } else {
                    RequestPhase::Loading { animation_tick: 0 }
                };
            }

            RequestIntent::Completed { result } => {
                if !state.is_loading() {
                    return state;
                }
                state.phase = match result {
                    Ok(summary) => RequestPhase::Success { summary },
                    Err(message) => RequestPhase::Error { message },
                };
            }

            RequestIntent::AnimationTick => {
                if let RequestPhase::Loading { animation_tick } = state.phase {
                    state.phase = RequestPhase::Loading {
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                }
            }
        }
        state
    }
}
