// src/infrastructure/settings_file.rs
use crate::application::SettingsRepository;
use crate::domain::{DomainError, Settings};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings persisted as one indented JSON object.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Settings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "No settings file, using defaults");
                return Settings::defaults();
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Cannot read settings, using defaults");
                return Settings::defaults();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(saved)) => Settings::merged(saved),
            Ok(other) => {
                warn!(path = ?self.path, kind = ?other, "Settings file is not an object, using defaults");
                Settings::defaults()
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Malformed settings file, using defaults");
                Settings::defaults()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|e| DomainError::io(&self.path, e))?;
        debug!(path = ?self.path, "Wrote settings file");
        Ok(())
    }
}
