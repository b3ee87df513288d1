//! Whole-file text reads for the round-trip input.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source file not found at {0}")]
    NotFound(PathBuf),
    #[error("unable to read {0}: {1}")]
    Io(PathBuf, String),
}

/// Reads the full contents of `path` as UTF-8 text. The handle is released
/// before returning, whether or not the read succeeded.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Io(path.to_path_buf(), format!("{e}")),
    })
}
