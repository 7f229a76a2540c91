//! Draft persistence
//!
//! - `store`: key-value boundary and the in-memory store
//! - `draft`: debounced autosave manager
//! - `error`: storage and draft failure types

pub mod draft;
pub mod error;
pub mod store;

pub use draft::{AutosaveState, DraftManager};
pub use error::{DraftError, StorageError};
pub use store::{KeyValueStore, MemoryStore};
