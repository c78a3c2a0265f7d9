//! In-memory settings store for tests and ephemeral sessions.

use std::sync::{Arc, RwLock};

use super::{SettingsError, SettingsStore, ShopSettings};

/// Settings held in memory, shared across clones.
#[derive(Clone, Default)]
pub struct InMemorySettings {
    settings: Arc<RwLock<ShopSettings>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettings {
    fn load(&self) -> Result<ShopSettings, SettingsError> {
        self.settings
            .read()
            .map(|settings| settings.clone())
            .map_err(|_| SettingsError::Io("settings lock poisoned".to_string()))
    }

    fn save(&self, settings: &ShopSettings) -> Result<(), SettingsError> {
        let mut slot = self
            .settings
            .write()
            .map_err(|_| SettingsError::Io("settings lock poisoned".to_string()))?;
        *slot = settings.clone();
        Ok(())
    }
}
