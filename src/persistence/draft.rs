//! Debounced draft autosave
//!
//! A [`DraftManager`] is bound to one storage key. Hosts feed it the latest
//! form snapshot on every edit via [`DraftManager::schedule_save`]; the
//! write happens once edits stop for the debounce interval. The host's frame
//! loop (or a JS interval) calls [`DraftManager::poll`] to fire due saves.
//!
//! Every public operation swallows store and serde failures after logging
//! them, so a broken store never interrupts the form.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::DraftError;
use super::store::KeyValueStore;
use crate::platform::Clock;
use crate::settings::AutosaveConfig;

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutosaveState {
    /// Nothing armed
    Idle,
    /// A save is armed and fires once the clock reaches `due_at_ms`
    Pending { due_at_ms: f64 },
}

/// The one armed save: snapshot is held unserialized until it fires
#[derive(Debug)]
struct PendingSave<T> {
    snapshot: T,
    due_at_ms: f64,
}

/// Debounced autosave of `T` under a single key
#[derive(Debug)]
pub struct DraftManager<T, S, C> {
    store: S,
    clock: C,
    key: String,
    config: AutosaveConfig,
    pending: Option<PendingSave<T>>,
    last_saved_at: Option<f64>,
}

impl<T, S, C> DraftManager<T, S, C>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
    C: Clock,
{
    /// Bind a manager to `key` with the default config
    pub fn new(store: S, clock: C, key: impl Into<String>) -> Self {
        Self::with_config(store, clock, key, AutosaveConfig::default())
    }

    /// Bind a manager to `key`, using `config` for [`Self::update`]
    pub fn with_config(store: S, clock: C, key: impl Into<String>, config: AutosaveConfig) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            config,
            pending: None,
            last_saved_at: None,
        }
    }

    /// Storage key this manager reads and writes
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &AutosaveConfig {
        &self.config
    }

    pub fn state(&self) -> AutosaveState {
        match &self.pending {
            Some(p) => AutosaveState::Pending {
                due_at_ms: p.due_at_ms,
            },
            None => AutosaveState::Idle,
        }
    }

    /// Clock time of the last successful write
    pub fn last_saved_at(&self) -> Option<f64> {
        self.last_saved_at
    }

    /// Arm a save of `snapshot` after `interval_ms`, replacing any armed one
    ///
    /// Only the most recent snapshot in a debounce window is ever written.
    /// A zero interval is due immediately and fires on the next `poll()`.
    pub fn schedule_save(&mut self, snapshot: T, interval_ms: u64) {
        if self.pending.is_some() {
            log::debug!("Draft '{}': rescheduling pending save", self.key);
        }
        let due_at_ms = self.clock.now_ms() + interval_ms as f64;
        self.pending = Some(PendingSave { snapshot, due_at_ms });
    }

    /// Arm a save using the configured interval (no-op when disabled)
    pub fn update(&mut self, snapshot: T) {
        if !self.config.enabled {
            log::debug!("Draft '{}': autosave disabled, ignoring update", self.key);
            return;
        }
        self.schedule_save(snapshot, self.config.effective_interval_ms());
    }

    /// Fire the armed save if its deadline has passed
    ///
    /// Returns `true` if a write was attempted (successful or not).
    pub fn poll(&mut self) -> bool {
        let due = matches!(&self.pending, Some(p) if self.clock.now_ms() >= p.due_at_ms);
        if !due {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            self.write_logged(&pending.snapshot);
        }
        true
    }

    /// Fire the armed save now, regardless of deadline
    ///
    /// Returns `false` only if a pending write failed.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => self.write_logged(&pending.snapshot),
            None => true,
        }
    }

    /// Disarm without writing; returns whether a save was pending
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        if was_pending {
            log::debug!("Draft '{}': pending save cancelled", self.key);
        }
        was_pending
    }

    /// Cancel any armed save and write `snapshot` immediately
    pub fn save_now(&mut self, snapshot: &T) -> bool {
        self.pending = None;
        self.write_logged(snapshot)
    }

    /// Read and decode the stored draft
    ///
    /// `None` when nothing is stored, the store fails, or the text no longer
    /// decodes as `T`.
    pub fn load_draft(&self) -> Option<T> {
        match self.read() {
            Ok(draft) => draft,
            Err(e) => {
                log::warn!("Draft '{}': load failed: {}", self.key, e);
                None
            }
        }
    }

    /// Delete the stored draft
    pub fn clear_draft(&mut self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => {
                log::info!("Draft '{}' cleared", self.key);
                true
            }
            Err(e) => {
                log::error!("Draft '{}': clear failed: {}", self.key, e);
                false
            }
        }
    }

    /// Whether anything is stored under the key (not decoded)
    pub fn has_draft(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.is_some(),
            Err(e) => {
                log::warn!("Draft '{}': presence check failed: {}", self.key, e);
                false
            }
        }
    }

    fn write(&self, snapshot: &T) -> Result<(), DraftError> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(&self.key, &json)?;
        Ok(())
    }

    fn read(&self) -> Result<Option<T>, DraftError> {
        let Some(json) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn write_logged(&mut self, snapshot: &T) -> bool {
        match self.write(snapshot) {
            Ok(()) => {
                self.last_saved_at = Some(self.clock.now_ms());
                log::info!("Draft '{}' saved", self.key);
                true
            }
            Err(e) => {
                log::error!("Draft '{}': save failed: {}", self.key, e);
                false
            }
        }
    }
}

impl<T, S, C> Drop for DraftManager<T, S, C> {
    fn drop(&mut self) {
        // Disposal must not leave a write behind
        if self.pending.take().is_some() {
            log::debug!("Draft '{}': discarded pending save on drop", self.key);
        }
    }
}
