//! Semestra data directory management.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::SemestraConfig;
use crate::error::{SemestraError, SemestraResult};
use crate::store::{EventStore, NotesStore};

/// Handle to the configured data directory and its stores.
#[derive(Clone)]
pub struct Semestra {
    config: SemestraConfig,
}

impl Semestra {
    pub fn load() -> SemestraResult<Self> {
        let config_path = SemestraConfig::config_path()?;

        if !config_path.exists() {
            SemestraConfig::create_default_config(&config_path)?;
        }

        let config: SemestraConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| SemestraError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SemestraError::Config(e.to_string()))?;

        Ok(Semestra { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn event_store(&self) -> SemestraResult<EventStore> {
        EventStore::open(&self.data_path())
    }

    pub fn notes_store(&self) -> NotesStore {
        NotesStore::new(&self.data_path())
    }
}
