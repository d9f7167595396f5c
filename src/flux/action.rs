//! Base trait for actions applied to a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - Record insertions, updates, and deletions
/// - Whole-entry replacements
/// - Full state resets
///
/// Actions are processed by reducers to produce new snapshots.
pub trait Action: Send + 'static {}
