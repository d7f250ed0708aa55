//! `localStorage` preference store.
//!
//! Values are read and written with raw `getItem`/`setItem` so they stay plain
//! strings (`dark`, not `"dark"`) and remain readable by other page scripts.

use duotone_core::{PreferenceStore, StorageError};
use gloo::utils::window;
use web_sys::Storage;

use super::describe_js;

pub(crate) struct BrowserStore {
    storage: Result<Storage, StorageError>,
}

impl BrowserStore {
    /// Resolve `window.localStorage`; failures surface on first use.
    pub(crate) fn open() -> Self {
        let storage = match window().local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable {
                detail: "localStorage is not exposed".to_string(),
            }),
            Err(err) => Err(StorageError::Unavailable {
                detail: describe_js(&err),
            }),
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().map_err(Clone::clone)
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                detail: describe_js(&err),
            })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                detail: describe_js(&err),
            })
    }
}
