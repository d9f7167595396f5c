//! The in-memory application data store and its reducer.

mod action;
mod error;
mod model;
mod reducer;
mod state;

pub use action::{ActionKind, AppAction};
pub use error::ReducerError;
pub use model::{record_key, Entry, ModelKey, Record};
pub use reducer::{init, AppDataReducer};
pub use state::DataStore;
