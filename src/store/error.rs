//! Error types for the app-data reducer.
//!
//! Every failure is reported synchronously to the caller and aborts the
//! current call; the input snapshot is never touched, so the caller's
//! reference stays valid either way.

use thiserror::Error;

use crate::store::action::ActionKind;
use crate::store::model::ModelKey;

/// Errors that can occur while applying an action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReducerError {
    /// Action kind used against a model it is not permitted to target.
    #[error("{kind} cannot target {model}; use ADD_ENTRY to replace it")]
    InvalidTarget { kind: ActionKind, model: ModelKey },

    /// Action kind not recognized at the wire boundary.
    #[error("unknown action kind '{0}'")]
    UnknownAction(String),

    /// Wire payload missing what routing needs (e.g. an item action
    /// without a model key).
    #[error("malformed action: {0}")]
    MalformedAction(String),
}

impl ReducerError {
    /// Stable error type string for logs and structured reporting.
    pub fn error_type(&self) -> &'static str {
        match self {
            ReducerError::InvalidTarget { .. } => "invalid_target",
            ReducerError::UnknownAction(_) => "unknown_action",
            ReducerError::MalformedAction(_) => "malformed_action",
        }
    }
}
