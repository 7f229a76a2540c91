//! Error types for draft persistence
//!
//! These never reach callers of [`DraftManager`](super::DraftManager): the
//! manager logs them and hands back `bool`/`Option` instead. Stores and
//! internal helpers still return them so failures carry a reason.

use thiserror::Error;

/// Failure raised by a key-value store backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No backing store (e.g. `window.localStorage` is blocked or missing)
    #[error("storage unavailable")]
    Unavailable,

    /// Write rejected because it would exceed the store's quota
    #[error("quota exceeded writing '{key}' ({bytes} bytes)")]
    QuotaExceeded { key: String, bytes: usize },

    /// Any other backend failure, with the backend's message
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Classify a browser storage exception by its DOMException `name`
    ///
    /// Messages are localized, so the message is only consulted when the
    /// exception carries no usable name.
    pub fn from_dom_exception(key: &str, bytes: usize, name: &str, message: &str) -> Self {
        let quota = match name {
            "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => true,
            "" | "Error" => message.to_lowercase().contains("quota"),
            _ => false,
        };
        if quota {
            StorageError::QuotaExceeded {
                key: key.to_string(),
                bytes,
            }
        } else if name == "SecurityError" {
            StorageError::Unavailable
        } else {
            StorageError::Backend(message.to_string())
        }
    }
}

/// Failure while saving or loading a draft snapshot
#[derive(Debug, Error)]
pub enum DraftError {
    /// Snapshot could not be encoded, or stored text could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store's get/set/remove failed
    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_message_names_key() {
        let err = StorageError::QuotaExceeded {
            key: "cessionpro_draft_listing".to_string(),
            bytes: 42,
        };
        assert_eq!(
            err.to_string(),
            "quota exceeded writing 'cessionpro_draft_listing' (42 bytes)"
        );
    }

    #[test]
    fn test_dom_quota_by_name_ignores_localized_message() {
        let err = StorageError::from_dom_exception(
            "draft",
            512,
            "QuotaExceededError",
            "Le quota de stockage est dépassé",
        );
        assert_eq!(
            err,
            StorageError::QuotaExceeded {
                key: "draft".to_string(),
                bytes: 512
            }
        );

        let err = StorageError::from_dom_exception("draft", 512, "QuotaExceededError", "配额已满");
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_dom_firefox_quota_name() {
        let err = StorageError::from_dom_exception("draft", 1, "NS_ERROR_DOM_QUOTA_REACHED", "");
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_dom_unnamed_falls_back_to_message() {
        let err = StorageError::from_dom_exception("draft", 1, "", "Storage quota exceeded");
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));

        let err = StorageError::from_dom_exception("draft", 1, "Error", "disk on fire");
        assert_eq!(err, StorageError::Backend("disk on fire".to_string()));
    }

    #[test]
    fn test_dom_other_names() {
        let err = StorageError::from_dom_exception("draft", 1, "InvalidStateError", "quota words");
        assert_eq!(err, StorageError::Backend("quota words".to_string()));

        let err = StorageError::from_dom_exception("draft", 1, "SecurityError", "denied");
        assert_eq!(err, StorageError::Unavailable);
    }

    #[test]
    fn test_draft_error_from_storage() {
        let err: DraftError = StorageError::Unavailable.into();
        assert!(matches!(err, DraftError::Persistence(StorageError::Unavailable)));
        assert_eq!(err.to_string(), "persistence error: storage unavailable");
    }

    #[test]
    fn test_draft_error_from_serde() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DraftError = parse.into();
        assert!(matches!(err, DraftError::Serialization(_)));
    }
}
