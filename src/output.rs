//! Writing generated files.
//!
//! Output is staged in a temporary file next to the target and renamed over it once fully written, so a failed run
//! never leaves a truncated file behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors that occur while reading or writing generated files. Every variant names the path involved.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create a temporary file in '{}': {source}", dir.display())]
    Stage { dir: PathBuf, source: io::Error },

    #[error("error writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot replace '{}': {source}", path.display())]
    Persist { path: PathBuf, source: io::Error },

    #[error("error reading '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// State of an existing output file compared with freshly generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Write `contents` to `path` atomically.
#[tracing::instrument(skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|source| WriteError::Stage {
        dir: dir.to_path_buf(),
        source,
    })?;
    let write_err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;

    // Dropping `staged` on any earlier error removes the temporary file.
    staged.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Compare the file at `path` with `contents` without modifying anything.
pub fn check_output(path: &Path, contents: &str) -> Result<Freshness, WriteError> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == contents => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(source) => Err(WriteError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
