//! Text Data Loader Module
//! Reads a `.txt` data file from disk and hands its contents to the validator.

use super::model::{Dataset, KeyMode};
use super::validator::{parse_dataset, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The only extension accepted for input files.
pub const DATA_EXTENSION: &str = "txt";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0}: invalid extension, the allowed file extension is .txt")]
    InvalidExtension(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// True iff the final suffix of `path` is exactly `.txt`.
pub fn is_txt(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(DATA_EXTENSION)
}

/// Like [`is_txt`], but reports the offending path.
pub fn check_extension(path: &Path) -> Result<(), LoaderError> {
    if is_txt(path) {
        Ok(())
    } else {
        Err(LoaderError::InvalidExtension(path.to_path_buf()))
    }
}

/// Read `path` as UTF-8 and validate it for the given key mode.
///
/// The extension is not checked here; callers that care use [`is_txt`].
pub fn load_and_validate(path: &Path, mode: KeyMode) -> Result<Dataset, LoaderError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text, mode)?;
    log::debug!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}
