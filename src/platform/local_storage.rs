//! Browser LocalStorage adapter

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

use crate::persistence::{KeyValueStore, StorageError};

/// [`KeyValueStore`] over `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's LocalStorage
    ///
    /// Fails with [`StorageError::Unavailable`] when there is no window or the
    /// browser denies access (private mode, disabled cookies).
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

/// Map a thrown storage exception, preferring the DOMException name
fn js_error(key: &str, bytes: usize, err: JsValue) -> StorageError {
    if let Some(dom) = err.dyn_ref::<DomException>() {
        return StorageError::from_dom_exception(key, bytes, &dom.name(), &dom.message());
    }
    let error = js_sys::Error::from(err);
    let name: String = error.name().into();
    let message: String = error.message().into();
    StorageError::from_dom_exception(key, bytes, &name, &message)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| js_error(key, 0, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error(key, value.len(), e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error(key, 0, e))
    }
}
