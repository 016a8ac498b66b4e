//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to produce new states, compared to
/// detect changes, and complete enough to render the view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
