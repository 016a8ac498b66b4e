//! Model-View-Intent (MVI) primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Side effects (network calls, clipboard writes) live in `App`; reducers
//! only compute the next state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
