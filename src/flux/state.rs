//! Base trait for store state snapshots.

/// Marker trait for state snapshots.
///
/// Snapshots should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (a complete value of the store at a point in time)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
