use log::{ debug, error };

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::models::state::AppState;
use crate::traits::key_value_store::KeyValueStore;

/// Key under which the form state is stored
pub const STORAGE_KEY: &str = "rtlForgeAppState";

/// Saves and restores the form state.
///
/// Failures are logged and swallowed: persistence must never get in the way of
/// generating.
pub struct StatePersistence<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StatePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, state: &AppState) {
        if let Err(e) = self.try_save(state) {
            error!("Error saving state: {}", e);
        }
    }

    /// Previously saved state, or `None` when missing or unreadable
    pub fn load(&self) -> Option<AppState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                error!("Error loading state: {}", e);
                None
            }
        }
    }

    pub fn reset(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            error!("Error clearing state: {}", e);
        }
    }

    fn try_save(&self, state: &AppState) -> RtlForgeResult<()> {
        let serialized = serde_json
            ::to_string(state)
            .map_err(|e| RtlForgeError::Persistence(e.to_string()))?;
        self.store.set(STORAGE_KEY, &serialized)?;
        debug!("Saved form state ({} bytes)", serialized.len());
        Ok(())
    }

    fn try_load(&self) -> RtlForgeResult<Option<AppState>> {
        let Some(serialized) = self.store.get(STORAGE_KEY)? else {
            debug!("No saved form state");
            return Ok(None);
        };
        serde_json
            ::from_str(&serialized)
            .map(Some)
            .map_err(|e| RtlForgeError::Persistence(format!("corrupt saved state: {}", e)))
    }
}
