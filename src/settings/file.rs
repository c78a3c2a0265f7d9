//! JSON-file-backed settings store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{SettingsError, SettingsStore, ShopSettings};

/// Settings persisted as a JSON file.
///
/// A missing file loads as the defaults, so first launch needs no
/// setup step.
#[derive(Clone, Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSettings { path: path.into() }
    }

    /// The file the settings are stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettings {
    fn load(&self) -> Result<ShopSettings, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ShopSettings::default());
            }
            Err(err) => return Err(SettingsError::Io(err.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| SettingsError::Serde(e.to_string()))
    }

    fn save(&self, settings: &ShopSettings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serde(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SettingsError::Io(e.to_string()))
    }
}
