//! The application data store snapshot.

use serde::{Deserialize, Serialize};

use crate::flux::State;
use crate::store::model::{Entry, ModelKey, Record};

/// One complete, immutable value of the application data store.
///
/// Every model key maps to its collection: an ordered sequence of
/// records for most models, a single record for settings. Snapshots
/// are never mutated in place; the reducer clones the snapshot it is
/// given and edits the clone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataStore {
    pub address_book: Vec<Record>,
    pub accounts: Vec<Record>,
    pub assets: Vec<Record>,
    pub contracts: Vec<Record>,
    pub networks: Vec<Record>,
    pub notifications: Vec<Record>,
    pub settings: Record,
}

impl State for DataStore {}

impl DataStore {
    /// Borrow the sequence collection stored under `key`.
    ///
    /// Returns `None` for the singleton settings model.
    pub fn sequence(&self, key: ModelKey) -> Option<&[Record]> {
        match key {
            ModelKey::AddressBook => Some(&self.address_book),
            ModelKey::Accounts => Some(&self.accounts),
            ModelKey::Assets => Some(&self.assets),
            ModelKey::Contracts => Some(&self.contracts),
            ModelKey::Networks => Some(&self.networks),
            ModelKey::Notifications => Some(&self.notifications),
            ModelKey::Settings => None,
        }
    }

    /// Mutably borrow the sequence collection stored under `key`.
    ///
    /// Returns `None` for the singleton settings model. Only the reducer
    /// uses this, and only on a clone of the caller's snapshot.
    pub(crate) fn sequence_mut(&mut self, key: ModelKey) -> Option<&mut Vec<Record>> {
        match key {
            ModelKey::AddressBook => Some(&mut self.address_book),
            ModelKey::Accounts => Some(&mut self.accounts),
            ModelKey::Assets => Some(&mut self.assets),
            ModelKey::Contracts => Some(&mut self.contracts),
            ModelKey::Networks => Some(&mut self.networks),
            ModelKey::Notifications => Some(&mut self.notifications),
            ModelKey::Settings => None,
        }
    }

    /// The whole value stored under `key`.
    pub fn entry(&self, key: ModelKey) -> Entry {
        match self.sequence(key) {
            Some(records) => Entry::Collection(records.to_vec()),
            None => Entry::Single(self.settings.clone()),
        }
    }
}
