//! JavaScript handle for the autosave manager
//!
//! Snapshots cross the boundary as JSON text (`JSON.stringify(form)`), so the
//! manager works on `serde_json::Value` here. The page owns the lifecycle:
//! create on mount, call `poll()` from an interval or animation frame, call
//! `free()` on unmount, which cancels any pending save.

use wasm_bindgen::prelude::*;

use super::{LocalStorage, SystemClock};
use crate::persistence::DraftManager;
use crate::settings::AutosaveConfig;

type JsonDraftManager = DraftManager<serde_json::Value, LocalStorage, SystemClock>;

/// Autosave bound to one LocalStorage key
#[wasm_bindgen]
pub struct DraftAutosave {
    inner: JsonDraftManager,
}

#[wasm_bindgen]
impl DraftAutosave {
    /// Bind to the draft called `name` (key built from the stored config)
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<DraftAutosave, JsValue> {
        let storage = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = AutosaveConfig::load(&storage);
        let key = config.key_for(name);
        Ok(Self {
            inner: DraftManager::with_config(storage, SystemClock::new(), key, config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn key(&self) -> String {
        self.inner.key().to_string()
    }

    /// Arm a save using the configured interval
    pub fn update(&mut self, json: &str) {
        if let Some(value) = parse_snapshot(json) {
            self.inner.update(value);
        }
    }

    /// Arm a save after `interval_ms`
    #[wasm_bindgen(js_name = scheduleSave)]
    pub fn schedule_save(&mut self, json: &str, interval_ms: u32) {
        if let Some(value) = parse_snapshot(json) {
            self.inner.schedule_save(value, u64::from(interval_ms));
        }
    }

    #[wasm_bindgen(js_name = saveNow)]
    pub fn save_now(&mut self, json: &str) -> bool {
        match parse_snapshot(json) {
            Some(value) => self.inner.save_now(&value),
            None => false,
        }
    }

    /// Stored draft as JSON text, or `undefined`
    #[wasm_bindgen(js_name = loadDraft)]
    pub fn load_draft(&self) -> Option<String> {
        self.inner
            .load_draft()
            .map(|value| value.to_string())
    }

    #[wasm_bindgen(js_name = clearDraft)]
    pub fn clear_draft(&mut self) -> bool {
        self.inner.clear_draft()
    }

    #[wasm_bindgen(js_name = hasDraft)]
    pub fn has_draft(&self) -> bool {
        self.inner.has_draft()
    }

    pub fn poll(&mut self) -> bool {
        self.inner.poll()
    }

    pub fn flush(&mut self) -> bool {
        self.inner.flush()
    }

    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    #[wasm_bindgen(getter, js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.state() != crate::persistence::AutosaveState::Idle
    }

    /// `Date.now()` of the last successful write, or `undefined`
    #[wasm_bindgen(getter, js_name = lastSavedAt)]
    pub fn last_saved_at(&self) -> Option<f64> {
        self.inner.last_saved_at()
    }
}

fn parse_snapshot(json: &str) -> Option<serde_json::Value> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Rejected draft snapshot: {}", e);
            None
        }
    }
}

/// Stat-card growth, exposed for the dashboard
#[wasm_bindgen(js_name = growthPercentage)]
pub fn growth_percentage(current: f64, previous: f64) -> f64 {
    crate::growth::growth_percentage(current, previous)
}

/// Normalized image URL, or `undefined`
#[wasm_bindgen(js_name = normalizeImageUrl)]
pub fn normalize_image_url(raw: &str, base: &str) -> Option<String> {
    crate::images::normalize_image_url(raw, base)
}
