//! In-memory, multi-collection application data store with a pure
//! reducer.
//!
//! The store is a fixed set of models — address book entries, accounts,
//! assets, contracts, networks, notifications, and a singleton settings
//! record. [`AppDataReducer`] evolves a snapshot one [`AppAction`] at a
//! time: it never mutates the snapshot it is given, and a rejected
//! action leaves the caller's reference untouched.
//!
//! Persistence and dispatch are the caller's concern. Callers applying
//! logically-sequential actions from multiple threads must serialize
//! the calls themselves; each call only sees the snapshot it is given.

pub mod flux;
pub mod store;

pub use store::{
    init, record_key, ActionKind, AppAction, AppDataReducer, DataStore, Entry, ModelKey, Record,
    ReducerError,
};
