use std::path::PathBuf;

use thiserror::Error;

use crate::sources::{load_dictionary, SourceError};

#[derive(Debug, Error)]
pub enum KeysCommandError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Clone)]
pub struct KeysOptions {
    pub catalogs: Vec<PathBuf>,
    pub prefix: String,
    pub config_path: PathBuf,
}

pub fn run_keys(options: &KeysOptions) -> Result<(), KeysCommandError> {
    for key in collect_keys(options)? {
        println!("{key}");
    }
    Ok(())
}

fn collect_keys(options: &KeysOptions) -> Result<Vec<String>, KeysCommandError> {
    let dictionary = load_dictionary(
        &options.config_path,
        &options.catalogs,
        &options.prefix,
        false,
    )?;
    let mut keys: Vec<String> = dictionary.keys().map(str::to_string).collect();
    keys.sort_unstable();
    Ok(keys)
}
