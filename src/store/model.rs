//! Model keys and record payloads.
//!
//! The store holds a fixed set of models. Every model except settings is
//! an ordered sequence of records identified by a key field; settings is
//! a single record replaced wholesale.

use serde::{Deserialize, Serialize};

/// An opaque structured value belonging to a model.
///
/// The reducer never interprets a record beyond reading its key field.
pub type Record = serde_json::Value;

/// Identifier selecting which model within the store an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModelKey {
    AddressBook,
    Accounts,
    Assets,
    Contracts,
    Networks,
    Notifications,
    Settings,
}

impl ModelKey {
    /// Storage name of the model, as used in serialized snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKey::AddressBook => "addressBook",
            ModelKey::Accounts => "accounts",
            ModelKey::Assets => "assets",
            ModelKey::Contracts => "contracts",
            ModelKey::Networks => "networks",
            ModelKey::Notifications => "notifications",
            ModelKey::Settings => "settings",
        }
    }

    /// Whether this model is an ordered sequence of records.
    ///
    /// Settings is the one singleton model; it holds a single record and
    /// is only ever replaced wholesale via `AddEntry`.
    pub fn is_sequence(&self) -> bool {
        !matches!(self, ModelKey::Settings)
    }

    /// Field used to identify a record uniquely within this model.
    ///
    /// Networks records are keyed by `id`; every other sequence model
    /// keys its records by `uuid`.
    pub fn key_field(&self) -> &'static str {
        match self {
            ModelKey::Networks => "id",
            _ => "uuid",
        }
    }
}

impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole value stored under a model key: a full sequence collection,
/// or the single settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Collection(Vec<Record>),
    Single(Record),
}

/// Extract a record's key value under the given key field.
///
/// Returns `None` when the record is not an object or lacks the field;
/// such records can never be matched by key-based operations.
pub fn record_key<'a>(record: &'a Record, field: &str) -> Option<&'a Record> {
    record.as_object().and_then(|obj| obj.get(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn networks_key_field_is_id() {
        assert_eq!(ModelKey::Networks.key_field(), "id");
        assert_eq!(ModelKey::Accounts.key_field(), "uuid");
        assert_eq!(ModelKey::AddressBook.key_field(), "uuid");
    }

    #[test]
    fn settings_is_the_only_singleton() {
        assert!(!ModelKey::Settings.is_sequence());
        for key in [
            ModelKey::AddressBook,
            ModelKey::Accounts,
            ModelKey::Assets,
            ModelKey::Contracts,
            ModelKey::Networks,
            ModelKey::Notifications,
        ] {
            assert!(key.is_sequence(), "{key} should be a sequence model");
        }
    }

    #[test]
    fn model_key_serializes_to_storage_name() {
        let json = serde_json::to_string(&ModelKey::AddressBook).unwrap();
        assert_eq!(json, "\"addressBook\"");
        let key: ModelKey = serde_json::from_str("\"networks\"").unwrap();
        assert_eq!(key, ModelKey::Networks);
    }

    #[test]
    fn record_key_reads_the_field() {
        let record = json!({"uuid": "a1", "name": "X"});
        assert_eq!(record_key(&record, "uuid"), Some(&json!("a1")));
        assert_eq!(record_key(&record, "id"), None);
        assert_eq!(record_key(&json!("not an object"), "uuid"), None);
    }
}
