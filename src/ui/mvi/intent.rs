//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are key presses, pastes, timer ticks and request completions,
/// already translated into domain terms.
pub trait Intent: Send + 'static {}
