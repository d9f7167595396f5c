//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits for evolving an application
//! data store one action at a time.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Consumers
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the store
//! - **Action**: A description of an intended mutation
//! - **Reducer**: Pure function that derives the next snapshot

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
