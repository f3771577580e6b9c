use log::warn;
use web_sys::{window, Storage};

use crate::error::{Result, ViewError};
use crate::state::PreferenceBackend;

/// `window.localStorage`. Private browsing modes may refuse access entirely,
/// in which case every call reports `StorageUnavailable`.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok()).flatten();
        if storage.is_none() {
            warn!("localStorage is not available, preferences won't be saved");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| ViewError::StorageUnavailable("localStorage is not available".to_string()))
    }
}

impl PreferenceBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| ViewError::StorageUnavailable(format!("{:?}", err)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| ViewError::StorageUnavailable(format!("{:?}", err)))
    }
}
