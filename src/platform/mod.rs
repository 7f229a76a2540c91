//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (JS `Date.now()` on web, `Instant` natively)
//! - Storage (LocalStorage on web)
//! - The JS-facing autosave handle

pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{Clock, ManualClock, SystemClock};
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
