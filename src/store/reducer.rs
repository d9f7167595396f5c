//! The app-data reducer.
//!
//! A pure state-transition function over [`DataStore`] snapshots. Each
//! call clones the snapshot it is given, edits the clone, and returns
//! it; the input is never mutated, so a failed call leaves the caller's
//! snapshot exactly as it was.

use crate::flux::Reducer;
use crate::store::action::{ActionKind, AppAction};
use crate::store::error::ReducerError;
use crate::store::model::{record_key, Entry, ModelKey, Record};
use crate::store::state::DataStore;

/// Seed or fully replace state.
///
/// Identity on the snapshot; equivalent to applying `Reset` with the
/// same data. Kept as the canonical entry point for startup and reset.
pub fn init(initial: DataStore) -> DataStore {
    initial
}

/// Reducer over the application data store.
pub struct AppDataReducer;

impl Reducer for AppDataReducer {
    type State = DataStore;
    type Action = AppAction;
    type Error = ReducerError;

    fn reduce(state: &DataStore, action: AppAction) -> Result<DataStore, ReducerError> {
        let kind = action.kind();
        tracing::trace!(action = %kind, "applying action");

        match action {
            AppAction::AddItem { model, data } => {
                let mut next = state.clone();
                match next.sequence_mut(model) {
                    Some(seq) => {
                        let merged = dedup_append(seq, &data);
                        *seq = merged;
                    }
                    None => return Err(invalid_target(kind, model)),
                }
                Ok(next)
            }
            AppAction::DeleteItem { model, data } => {
                // Networks records are protected from generic deletion.
                if model == ModelKey::Networks {
                    return Err(invalid_target(kind, model));
                }
                let mut next = state.clone();
                match next.sequence_mut(model) {
                    Some(seq) => delete_by_key(seq, model.key_field(), &data),
                    None => return Err(invalid_target(kind, model)),
                }
                Ok(next)
            }
            AppAction::UpdateItem { model, data } => {
                let mut next = state.clone();
                match next.sequence_mut(model) {
                    Some(seq) => upsert_by_key(seq, model.key_field(), data),
                    None => return Err(invalid_target(kind, model)),
                }
                Ok(next)
            }
            AppAction::UpdateNetwork { data } => {
                let mut next = state.clone();
                upsert_by_key(
                    &mut next.networks,
                    ModelKey::Networks.key_field(),
                    data,
                );
                Ok(next)
            }
            AppAction::AddEntry { model, entry } => {
                let mut next = state.clone();
                match (next.sequence_mut(model), entry) {
                    (Some(seq), Entry::Collection(records)) => *seq = records,
                    (None, Entry::Single(record)) => next.settings = record,
                    // The typed store cannot hold a single record in a
                    // sequence slot or a collection in the settings slot.
                    _ => return Err(invalid_target(kind, model)),
                }
                Ok(next)
            }
            AppAction::Reset { data } => {
                tracing::debug!("resetting store");
                Ok(init(*data))
            }
        }
    }
}

fn invalid_target(kind: ActionKind, model: ModelKey) -> ReducerError {
    tracing::warn!(action = %kind, model = %model, "action rejected for protected model");
    ReducerError::InvalidTarget { kind, model }
}

/// Append `data`, collapsing structural duplicates.
///
/// Keeps first-occurrence order, so re-adding a record that is already
/// present (field for field) is a no-op.
fn dedup_append(seq: &[Record], data: &Record) -> Vec<Record> {
    let mut out: Vec<Record> = Vec::with_capacity(seq.len() + 1);
    for record in seq.iter().chain(std::iter::once(data)) {
        if !out.contains(record) {
            out.push(record.clone());
        }
    }
    out
}

/// Remove every record whose key field equals `data`'s key field.
///
/// A `data` payload without the key field matches nothing, as do stored
/// records lacking the field. Never inserts.
fn delete_by_key(seq: &mut Vec<Record>, field: &str, data: &Record) {
    let Some(key) = record_key(data, field) else {
        return;
    };
    seq.retain(|record| record_key(record, field) != Some(key));
}

/// Replace the record matching `data`'s key field, or insert `data`.
///
/// Tie-break rule: a matching key is replaced in place, preserving the
/// record's position; an unseen key (or a keyless payload) is appended
/// at the end. Chosen over the original new-record-first union order so
/// collection order stays stable under repeated updates.
fn upsert_by_key(seq: &mut Vec<Record>, field: &str, data: Record) {
    match record_key(&data, field).cloned() {
        Some(key) => {
            if let Some(slot) = seq
                .iter_mut()
                .find(|record| record_key(record, field) == Some(&key))
            {
                *slot = data;
            } else {
                seq.push(data);
            }
        }
        None => seq.push(data),
    }
}
