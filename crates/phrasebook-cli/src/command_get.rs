use std::path::PathBuf;

use thiserror::Error;

use crate::sources::{load_dictionary, SourceError};

#[derive(Debug, Error)]
pub enum GetCommandError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("missing key {0:?}")]
    MissingKey(String),
}

#[derive(Debug, Clone)]
pub struct GetOptions {
    pub catalogs: Vec<PathBuf>,
    pub prefix: String,
    pub config_path: PathBuf,
    pub parts: Vec<String>,
}

/// Prints the composed lookup result. A miss still prints the visible
/// `{{key}}` placeholder, then fails so scripts see a nonzero exit.
pub fn run_get(options: &GetOptions) -> Result<(), GetCommandError> {
    let (output, found) = lookup(options)?;
    println!("{output}");
    if !found {
        let composed = options.parts.join(".");
        return Err(GetCommandError::MissingKey(composed));
    }
    Ok(())
}

fn lookup(options: &GetOptions) -> Result<(String, bool), GetCommandError> {
    let dictionary = load_dictionary(
        &options.config_path,
        &options.catalogs,
        &options.prefix,
        false,
    )?;
    let parts: Vec<&str> = options.parts.iter().map(String::as_str).collect();
    let found = dictionary.find_path(&parts).is_some();
    Ok((dictionary.get_path(&parts).into_owned(), found))
}

#[cfg(test)]
mod tests {
    use super::{lookup, run_get, GetOptions};
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("phrasebook_{name}_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn options(dir: &Path, parts: &[&str]) -> GetOptions {
        GetOptions {
            catalogs: vec![dir.join("ui.txt")],
            prefix: String::new(),
            config_path: dir.join("phrasebook.toml"),
            parts: parts.iter().map(|part| part.to_string()).collect(),
        }
    }

    #[test]
    fn finds_a_value_by_parts() {
        let dir = temp_dir("get");
        fs::write(dir.join("ui.txt"), "## svc.timeout : 30s\n").expect("write");

        let (output, found) = lookup(&options(&dir, &["svc", "timeout"])).expect("lookup");
        assert!(found);
        assert_eq!(output, "30s");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn miss_yields_placeholder_and_error() {
        let dir = temp_dir("get_miss");
        fs::write(dir.join("ui.txt"), "## a\nx\n").expect("write");

        let opts = options(&dir, &["a", "b"]);
        let (output, found) = lookup(&opts).expect("lookup");
        assert!(!found);
        assert_eq!(output, "{{a.b}}");
        let err = run_get(&opts).expect_err("missing");
        assert_eq!(err.to_string(), "missing key \"a.b\"");

        fs::remove_dir_all(&dir).ok();
    }
}
