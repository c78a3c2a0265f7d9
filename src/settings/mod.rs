//! Shop settings - the few values persisted outside the record store.
//!
//! The dashboard keeps its shop name, logo, and dark-mode preference in
//! simple key-value storage. This module mirrors that: a settings
//! struct, a load/save trait, and file-backed plus in-memory stores.
//! The record store does not depend on any of this.

mod file;
mod in_memory;

pub use file::JsonFileSettings;
pub use in_memory::InMemorySettings;

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Persisted dashboard settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub shop_name: String,
    /// Logo image bytes, base64-encoded. `None` when no logo is set.
    pub logo: Option<String>,
    pub dark_mode: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            shop_name: "My Shop".to_string(),
            logo: None,
            dark_mode: true,
        }
    }
}

impl ShopSettings {
    /// Set the logo from raw image bytes.
    pub fn set_logo_bytes(&mut self, bytes: &[u8]) {
        self.logo = Some(STANDARD.encode(bytes));
    }

    /// Decode the stored logo, if any.
    pub fn logo_bytes(&self) -> Result<Option<Vec<u8>>, SettingsError> {
        match &self.logo {
            Some(encoded) => STANDARD
                .decode(encoded)
                .map(Some)
                .map_err(|e| SettingsError::Logo(e.to_string())),
            None => Ok(None),
        }
    }
}

/// Error from loading or saving settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Serde(String),
    /// The stored logo payload is not valid base64.
    Logo(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(message) => write!(f, "settings io error: {}", message),
            SettingsError::Serde(message) => {
                write!(f, "settings serialization error: {}", message)
            }
            SettingsError::Logo(message) => write!(f, "settings logo invalid: {}", message),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Load/save access to the persisted settings.
pub trait SettingsStore: Send + Sync {
    /// Load the settings, falling back to defaults when nothing has
    /// been saved yet.
    fn load(&self) -> Result<ShopSettings, SettingsError>;

    /// Persist the settings.
    fn save(&self, settings: &ShopSettings) -> Result<(), SettingsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = ShopSettings::default();
        assert_eq!(settings.shop_name, "My Shop");
        assert_eq!(settings.logo, None);
        assert!(settings.dark_mode);
    }

    #[test]
    fn logo_bytes_roundtrip() {
        let mut settings = ShopSettings::default();
        settings.set_logo_bytes(b"\x89PNG\r\n");
        assert_eq!(settings.logo_bytes().unwrap().unwrap(), b"\x89PNG\r\n");
    }

    #[test]
    fn corrupt_logo_payload_is_an_error() {
        let settings = ShopSettings {
            logo: Some("not base64!!".to_string()),
            ..ShopSettings::default()
        };
        assert!(matches!(
            settings.logo_bytes(),
            Err(SettingsError::Logo(_))
        ));
    }
}
