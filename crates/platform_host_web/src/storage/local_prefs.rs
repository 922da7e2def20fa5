//! `localStorage`-backed preference store implementation.
//!
//! The browser API is synchronous; the adapter still implements the async
//! [`platform_host::PrefsStore`] contract so callers stay host-agnostic.

use platform_host::{PrefsError, PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| PrefsError::Unavailable("localStorage unavailable".to_string()))
}

impl WebPrefsStore {
    /// Loads a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable.
    pub fn load_json(self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage.get_item(key).map_err(|e| PrefsError::Backend {
                key: key.to_string(),
                message: format!("localStorage get_item failed: {e:?}"),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage
                .set_item(key, raw_json)
                .map_err(|e| PrefsError::Backend {
                    key: key.to_string(),
                    message: format!("localStorage set_item failed: {e:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Deletes a preference key from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage()?;
            storage.remove_item(key).map_err(|e| PrefsError::Backend {
                key: key.to_string(),
                message: format!("localStorage remove_item failed: {e:?}"),
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, PrefsError>> {
        let store = *self;
        Box::pin(async move { store.load_json(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), PrefsError>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}
