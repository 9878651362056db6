use std::path::PathBuf;

use thiserror::Error;

use crate::sources::{load_dictionary, SourceError};

#[derive(Debug, Error)]
pub enum CheckCommandError {
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub catalogs: Vec<PathBuf>,
    pub prefix: String,
    pub config_path: PathBuf,
}

/// Loads every catalog with overwrite disallowed, so the first duplicate
/// key across the whole set fails the command.
pub fn run_check(options: &CheckOptions) -> Result<(), CheckCommandError> {
    let dictionary = load_dictionary(
        &options.config_path,
        &options.catalogs,
        &options.prefix,
        false,
    )?;
    println!("{} keys across {} catalogs", dictionary.len(), options.catalogs.len());
    Ok(())
}
