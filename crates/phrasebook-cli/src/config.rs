use std::fs;
use std::path::Path;

use phrasebook_core::DictionaryConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reads a [`DictionaryConfig`] from a TOML file, falling back to the
/// defaults when the file does not exist.
pub fn load_config_or_default(path: &Path) -> Result<DictionaryConfig, ConfigError> {
    if !path.exists() {
        return Ok(DictionaryConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
