// src/application/settings_manager.rs
use crate::application::SettingsRepository;
use crate::domain::{DomainError, Settings, SettingsRecord};
use tracing::info;

pub struct SettingsManager<S: SettingsRepository> {
    repository: S,
}

impl<S: SettingsRepository> SettingsManager<S> {
    pub fn new(repository: S) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> Settings {
        self.repository.load()
    }

    /// Persist a full record. Keys not in the record are dropped from the file.
    pub fn save(&self, record: SettingsRecord) -> Result<Settings, DomainError> {
        let settings = Settings::from(record);
        self.repository.save(&settings)?;
        info!(theme = settings.theme(), "Saved settings");
        Ok(settings)
    }
}
