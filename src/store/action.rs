//! Actions applied to the data store.
//!
//! Typed actions are what the reducer consumes. The wire shape used by
//! the original dispatch layer — `{ "type": ..., "payload": { "model":
//! ..., "data": ... } }` — can be parsed with [`AppAction::from_value`];
//! that boundary is where unknown kinds are rejected.

use std::str::FromStr;

use serde_json::Value;

use crate::flux::Action;
use crate::store::error::ReducerError;
use crate::store::model::{Entry, ModelKey, Record};
use crate::store::state::DataStore;

/// Name of an action kind, as spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    AddItem,
    DeleteItem,
    UpdateItem,
    UpdateNetwork,
    AddEntry,
    Reset,
}

impl ActionKind {
    /// Wire spelling of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::AddItem => "ADD_ITEM",
            ActionKind::DeleteItem => "DELETE_ITEM",
            ActionKind::UpdateItem => "UPDATE_ITEM",
            ActionKind::UpdateNetwork => "UPDATE_NETWORK",
            ActionKind::AddEntry => "ADD_ENTRY",
            ActionKind::Reset => "RESET",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ReducerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD_ITEM" => Ok(ActionKind::AddItem),
            "DELETE_ITEM" => Ok(ActionKind::DeleteItem),
            "UPDATE_ITEM" => Ok(ActionKind::UpdateItem),
            "UPDATE_NETWORK" => Ok(ActionKind::UpdateNetwork),
            "ADD_ENTRY" => Ok(ActionKind::AddEntry),
            "RESET" => Ok(ActionKind::Reset),
            other => Err(ReducerError::UnknownAction(other.to_string())),
        }
    }
}

/// An intended mutation of the data store.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Append a record to a sequence model, collapsing structural
    /// duplicates. Re-adding an identical record is a no-op.
    AddItem { model: ModelKey, data: Record },
    /// Remove the record whose key field matches `data`'s key field.
    DeleteItem { model: ModelKey, data: Record },
    /// Replace the record matching `data`'s key field, or insert `data`
    /// when no record matches.
    UpdateItem { model: ModelKey, data: Record },
    /// Same upsert as `UpdateItem`, fixed to the networks model and
    /// keyed by `id`.
    UpdateNetwork { data: Record },
    /// Replace the entire value stored under `model` with `entry`.
    AddEntry { model: ModelKey, entry: Entry },
    /// Replace the entire state.
    Reset { data: Box<DataStore> },
}

impl Action for AppAction {}

impl AppAction {
    /// Kind of this action, as spelled on the wire.
    pub fn kind(&self) -> ActionKind {
        match self {
            AppAction::AddItem { .. } => ActionKind::AddItem,
            AppAction::DeleteItem { .. } => ActionKind::DeleteItem,
            AppAction::UpdateItem { .. } => ActionKind::UpdateItem,
            AppAction::UpdateNetwork { .. } => ActionKind::UpdateNetwork,
            AppAction::AddEntry { .. } => ActionKind::AddEntry,
            AppAction::Reset { .. } => ActionKind::Reset,
        }
    }

    /// Parse an action from the wire shape
    /// `{ "type": ..., "payload": { "model": ..., "data": ... } }`.
    ///
    /// Unrecognized `type` strings fail with `UnknownAction`; a payload
    /// missing what routing needs fails with `MalformedAction`.
    pub fn from_value(value: &Value) -> Result<Self, ReducerError> {
        let kind_str = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ReducerError::MalformedAction("missing 'type' field".to_string()))?;
        let kind = ActionKind::from_str(kind_str)?;

        let payload = value
            .get("payload")
            .and_then(Value::as_object)
            .ok_or_else(|| ReducerError::MalformedAction("missing 'payload' object".to_string()))?;
        let data = payload
            .get("data")
            .cloned()
            .ok_or_else(|| ReducerError::MalformedAction("payload missing 'data'".to_string()))?;

        let model = |kind: ActionKind| -> Result<ModelKey, ReducerError> {
            let raw = payload.get("model").ok_or_else(|| {
                ReducerError::MalformedAction(format!("{kind} payload missing 'model'"))
            })?;
            serde_json::from_value(raw.clone()).map_err(|_| {
                ReducerError::MalformedAction(format!("{kind} payload has unknown model {raw}"))
            })
        };

        match kind {
            ActionKind::AddItem => Ok(AppAction::AddItem {
                model: model(kind)?,
                data,
            }),
            ActionKind::DeleteItem => Ok(AppAction::DeleteItem {
                model: model(kind)?,
                data,
            }),
            ActionKind::UpdateItem => Ok(AppAction::UpdateItem {
                model: model(kind)?,
                data,
            }),
            ActionKind::UpdateNetwork => Ok(AppAction::UpdateNetwork { data }),
            ActionKind::AddEntry => {
                let entry = serde_json::from_value(data)
                    .map_err(|e| ReducerError::MalformedAction(format!("bad entry: {e}")))?;
                Ok(AppAction::AddEntry {
                    model: model(kind)?,
                    entry,
                })
            }
            ActionKind::Reset => {
                let store: DataStore = serde_json::from_value(data).map_err(|e| {
                    ReducerError::MalformedAction(format!("RESET data is not a store: {e}"))
                })?;
                Ok(AppAction::Reset {
                    data: Box::new(store),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_round_trips_through_wire_spelling() {
        for kind in [
            ActionKind::AddItem,
            ActionKind::DeleteItem,
            ActionKind::UpdateItem,
            ActionKind::UpdateNetwork,
            ActionKind::AddEntry,
            ActionKind::Reset,
        ] {
            assert_eq!(kind.as_str().parse::<ActionKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_string_is_rejected() {
        let err = "TOGGLE_ITEM".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, ReducerError::UnknownAction("TOGGLE_ITEM".to_string()));
    }

    #[test]
    fn parses_add_item_from_wire_shape() {
        let wire = json!({
            "type": "ADD_ITEM",
            "payload": {"model": "accounts", "data": {"uuid": "a1"}}
        });
        let action = AppAction::from_value(&wire).unwrap();
        assert_eq!(
            action,
            AppAction::AddItem {
                model: ModelKey::Accounts,
                data: json!({"uuid": "a1"}),
            }
        );
    }

    #[test]
    fn update_network_ignores_the_model_field() {
        let wire = json!({
            "type": "UPDATE_NETWORK",
            "payload": {"data": {"id": "mainnet"}}
        });
        let action = AppAction::from_value(&wire).unwrap();
        assert_eq!(action.kind(), ActionKind::UpdateNetwork);
    }

    #[test]
    fn item_action_without_model_is_malformed() {
        let wire = json!({
            "type": "DELETE_ITEM",
            "payload": {"data": {"uuid": "a1"}}
        });
        let err = AppAction::from_value(&wire).unwrap_err();
        assert_eq!(err.error_type(), "malformed_action");
    }

    #[test]
    fn unknown_wire_kind_is_rejected() {
        let wire = json!({"type": "NUKE", "payload": {"data": {}}});
        let err = AppAction::from_value(&wire).unwrap_err();
        assert_eq!(err, ReducerError::UnknownAction("NUKE".to_string()));
    }

    #[test]
    fn add_entry_accepts_collection_and_single_shapes() {
        let collection = json!({
            "type": "ADD_ENTRY",
            "payload": {"model": "accounts", "data": [{"uuid": "a1"}]}
        });
        let action = AppAction::from_value(&collection).unwrap();
        assert!(matches!(
            action,
            AppAction::AddEntry {
                entry: Entry::Collection(_),
                ..
            }
        ));

        let single = json!({
            "type": "ADD_ENTRY",
            "payload": {"model": "settings", "data": {"theme": "dark"}}
        });
        let action = AppAction::from_value(&single).unwrap();
        assert!(matches!(
            action,
            AppAction::AddEntry {
                entry: Entry::Single(_),
                ..
            }
        ));
    }
}
