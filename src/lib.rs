//! Cessionpro drafts - form autosave and listing helpers
//!
//! Core modules:
//! - `persistence`: Debounced draft autosave over a key-value store
//! - `platform`: Browser/native platform abstraction (clock, LocalStorage, JS handle)
//! - `settings`: Autosave preferences
//! - `growth`: Stat-card growth percentages
//! - `images`: Listing image URL normalization

pub mod growth;
pub mod images;
pub mod persistence;
pub mod platform;
pub mod settings;

pub use persistence::{AutosaveState, DraftManager, KeyValueStore, MemoryStore, StorageError};
pub use platform::{Clock, ManualClock, SystemClock};
pub use settings::AutosaveConfig;

/// Autosave configuration constants
pub mod consts {
    /// Default debounce window (3 seconds after the last edit)
    pub const DEFAULT_INTERVAL_MS: u64 = 3000;
    /// Floor applied to configured debounce windows
    pub const MIN_INTERVAL_MS: u64 = 100;
    /// Prefix for draft storage keys
    pub const DEFAULT_KEY_PREFIX: &str = "cessionpro_draft_";
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::rc::Rc;

    proptest! {
        /// Whatever the schedule pattern, once edits stop only the last
        /// snapshot is stored
        #[test]
        fn prop_last_schedule_wins(
            gaps in prop::collection::vec(0u64..1000, 1..20),
            values in prop::collection::vec(any::<i64>(), 1..20),
        ) {
            let store = Rc::new(MemoryStore::new());
            let clock = ManualClock::new();
            let mut manager = DraftManager::new(Rc::clone(&store), clock.clone(), "prop");

            let n = gaps.len().min(values.len());
            for i in 0..n {
                manager.schedule_save(values[i], 1000);
                // Every gap is inside the window, so nothing may fire yet
                clock.advance(gaps[i] as f64 * 0.999);
                manager.poll();
                prop_assert!(!manager.has_draft());
            }

            clock.advance(1000.0);
            prop_assert!(manager.poll());
            prop_assert_eq!(manager.load_draft(), Some(values[n - 1]));
        }

        #[test]
        fn prop_save_now_round_trips(title in ".{0,40}", price in any::<u32>()) {
            let mut manager = DraftManager::new(MemoryStore::new(), ManualClock::new(), "prop");
            let snapshot = (title, price);
            prop_assert!(manager.save_now(&snapshot));
            prop_assert_eq!(manager.load_draft(), Some(snapshot));
        }
    }
}
