//! Summarization request feature module.
//!
//! Holds the text being edited, the selected length and the request phase
//! (idle → loading → success/error).
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Request state and phase
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::{RequestPhase, RequestState, EMPTY_INPUT_MESSAGE};
