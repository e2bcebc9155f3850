//! Marker trait for reducer-owned state.

/// State values are cloned to snapshot, compared to detect changes, and
/// start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
