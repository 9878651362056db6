use std::fs;
use std::path::{Path, PathBuf};

use phrasebook_core::{Dictionary, DictionaryError};
use thiserror::Error;

use crate::config::{load_config_or_default, ConfigError};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads every catalog file into one dictionary configured from
/// `config_path`. All files share the same prefix; the overwrite policy
/// applies across files, so a key repeated in a later catalog is a
/// duplicate unless `overwrite` is set.
pub fn load_dictionary(
    config_path: &Path,
    catalogs: &[PathBuf],
    prefix: &str,
    overwrite: bool,
) -> Result<Dictionary, SourceError> {
    let config = load_config_or_default(config_path)?;
    let mut dictionary = Dictionary::new(config);
    dictionary.set_overwrite_allowed(overwrite);
    for path in catalogs {
        let data = fs::read(path)?;
        dictionary.load(prefix, &data)?;
    }
    Ok(dictionary)
}
