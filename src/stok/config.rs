use crate::error::{Result, StokError};
use crate::model::Unit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "stok.json";
const DEFAULT_DATA_FILE: &str = "products.json";

/// Configuration for a scope, stored in `stok.json` next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StokConfig {
    /// File name of the record store inside the scope directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Unit preselected when none is given
    #[serde(default)]
    pub default_unit: Unit,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for StokConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_unit: Unit::default(),
        }
    }
}

impl StokConfig {
    pub const KEYS: [&'static str; 2] = ["data-file", "default-unit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StokError::Io)?;
        let config: StokConfig =
            serde_json::from_str(&content).map_err(StokError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StokError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StokError::Serialization)?;
        fs::write(config_path, content).map_err(StokError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "default-unit" => Some(self.default_unit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(StokError::Config(format!(
                        "data-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            "default-unit" => {
                self.default_unit = value.parse().map_err(StokError::Config)?;
            }
            other => {
                return Err(StokError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
