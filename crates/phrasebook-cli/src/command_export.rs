use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::sources::{load_dictionary, SourceError};

#[derive(Debug, Error)]
pub enum ExportCommandError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub catalogs: Vec<PathBuf>,
    pub prefix: String,
    pub config_path: PathBuf,
    pub out_path: Option<PathBuf>,
}

/// Dumps the flat key-value map as pretty JSON, to `--out` or stdout.
pub fn run_export(options: &ExportOptions) -> Result<(), ExportCommandError> {
    let json = render_export(options)?;
    match &options.out_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn render_export(options: &ExportOptions) -> Result<String, ExportCommandError> {
    let dictionary = load_dictionary(
        &options.config_path,
        &options.catalogs,
        &options.prefix,
        false,
    )?;
    let entries: BTreeMap<&str, &str> = dictionary.iter().collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
