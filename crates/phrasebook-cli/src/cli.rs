use std::path::PathBuf;

use thiserror::Error;

use crate::command_check::{run_check, CheckCommandError, CheckOptions};
use crate::command_export::{run_export, ExportCommandError, ExportOptions};
use crate::command_get::{run_get, GetCommandError, GetOptions};
use crate::command_keys::{run_keys, KeysCommandError, KeysOptions};

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Keys(#[from] KeysCommandError),
    #[error(transparent)]
    Get(#[from] GetCommandError),
    #[error(transparent)]
    Check(#[from] CheckCommandError),
    #[error(transparent)]
    Export(#[from] ExportCommandError),
}

pub fn run() -> Result<(), CliAppError> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "keys" => {
            let options = parse_keys_options(args.collect())?;
            run_keys(&options)?;
            Ok(())
        }
        "get" => {
            let options = parse_get_options(args.collect())?;
            run_get(&options)?;
            Ok(())
        }
        "check" => {
            let options = parse_check_options(args.collect())?;
            run_check(&options)?;
            Ok(())
        }
        "export" => {
            let options = parse_export_options(args.collect())?;
            run_export(&options)?;
            Ok(())
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn parse_keys_options(args: Vec<String>) -> Result<KeysOptions, CliAppError> {
    let mut catalogs = Vec::new();
    let mut prefix = String::new();
    let mut config_path = PathBuf::from("phrasebook.toml");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalogs.push(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--prefix" => prefix = next_value("--prefix", &mut iter)?,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    if catalogs.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(KeysOptions {
        catalogs,
        prefix,
        config_path,
    })
}

fn parse_get_options(args: Vec<String>) -> Result<GetOptions, CliAppError> {
    let mut catalogs = Vec::new();
    let mut prefix = String::new();
    let mut config_path = PathBuf::from("phrasebook.toml");
    let mut parts = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalogs.push(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--prefix" => prefix = next_value("--prefix", &mut iter)?,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ if arg.starts_with("--") => return Err(CliAppError::Usage(usage())),
            _ => parts.push(arg),
        }
    }
    if catalogs.is_empty() || parts.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(GetOptions {
        catalogs,
        prefix,
        config_path,
        parts,
    })
}

fn parse_check_options(args: Vec<String>) -> Result<CheckOptions, CliAppError> {
    let mut catalogs = Vec::new();
    let mut prefix = String::new();
    let mut config_path = PathBuf::from("phrasebook.toml");
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalogs.push(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--prefix" => prefix = next_value("--prefix", &mut iter)?,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    if catalogs.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(CheckOptions {
        catalogs,
        prefix,
        config_path,
    })
}

fn parse_export_options(args: Vec<String>) -> Result<ExportOptions, CliAppError> {
    let mut catalogs = Vec::new();
    let mut prefix = String::new();
    let mut config_path = PathBuf::from("phrasebook.toml");
    let mut out_path = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => catalogs.push(PathBuf::from(next_value("--catalog", &mut iter)?)),
            "--prefix" => prefix = next_value("--prefix", &mut iter)?,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--out" => out_path = Some(PathBuf::from(next_value("--out", &mut iter)?)),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    if catalogs.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(ExportOptions {
        catalogs,
        prefix,
        config_path,
        out_path,
    })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: phrasebook keys --catalog <path> [--catalog <path>...] [--prefix <p>] [--config <path>]\n       phrasebook get --catalog <path> [--catalog <path>...] [--prefix <p>] [--config <path>] <part> [<part>...]\n       phrasebook check --catalog <path> [--catalog <path>...] [--prefix <p>] [--config <path>]\n       phrasebook export --catalog <path> [--catalog <path>...] [--prefix <p>] [--config <path>] [--out <path>]".to_string()
}
