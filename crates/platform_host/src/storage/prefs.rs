//! Lightweight preference storage contracts and adapters.
//!
//! Values are stored as JSON text per key, so a brightness of `100` is persisted as `"100"` and
//! a dark-mode flag as `"true"`.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure raised by a preference store or by typed (de)serialization around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefsError {
    /// The backing store cannot be reached on this host.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    /// The backing store rejected the operation.
    #[error("preference storage failed for `{key}`: {message}")]
    Backend {
        /// Key involved in the failed operation.
        key: String,
        /// Host-reported failure text.
        message: String,
    },
    /// The stored value could not be converted to or from JSON.
    #[error("preference `{key}` is not valid JSON for the requested type: {message}")]
    Serialization {
        /// Key involved in the failed conversion.
        key: String,
        /// Serializer failure text.
        message: String,
    },
}

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(&'a self, key: &'a str)
        -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>>;

    /// Deletes a preference key.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw stored text for `key`, bypassing the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| PrefsError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|e| PrefsError::Serialization {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("settings-volume", "75")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("settings-volume")).expect("load"),
            Some("75".to_string())
        );
        block_on(store_obj.delete_pref("settings-volume")).expect("delete");
        assert_eq!(
            block_on(store_obj.load_pref("settings-volume")).expect("load"),
            None
        );
    }

    #[test]
    fn typed_pref_helpers_store_plain_json_scalars() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "settings-brightness", &85_u8)).expect("save number");
        block_on(save_pref_with(&store, "settings-darkmode", &true)).expect("save flag");

        assert_eq!(store.raw("settings-brightness").as_deref(), Some("85"));
        assert_eq!(store.raw("settings-darkmode").as_deref(), Some("true"));

        let brightness: Option<u8> =
            block_on(load_pref_with(&store, "settings-brightness")).expect("load number");
        let dark: Option<bool> =
            block_on(load_pref_with(&store, "settings-darkmode")).expect("load flag");
        assert_eq!(brightness, Some(85));
        assert_eq!(dark, Some(true));
    }

    #[test]
    fn typed_load_reports_malformed_values() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("settings-volume", "loud")).expect("save");

        let err = block_on(load_pref_with::<_, u8>(&store, "settings-volume"))
            .expect_err("malformed value");
        assert!(matches!(err, PrefsError::Serialization { ref key, .. } if key == "settings-volume"));
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
        block_on(store_obj.delete_pref("k")).expect("delete");
    }
}
