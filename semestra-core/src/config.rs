//! Global semestra configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{SemestraError, SemestraResult};

static DEFAULT_DATA_PATH: &str = "~/semestra";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Global configuration at ~/.config/semestra/config.toml
#[derive(Deserialize, Clone)]
pub struct SemestraConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,
}

impl SemestraConfig {
    pub fn config_path() -> SemestraResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SemestraError::Config("Could not determine config directory".into()))?
            .join("semestra");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> SemestraResult<()> {
        let contents = format!(
            "\
# semestra configuration

# Where your events and notes live:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SemestraError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SemestraError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
