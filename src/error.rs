//! Error types for mdhtml operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a documentation tree.
///
/// Only opening the top-level input directory and creating the top-level
/// output directory are fatal to a run; every per-file variant is isolated
/// by the walker, logged, and counted.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open directory {path}: {source}")]
    OpenDir { path: PathBuf, source: io::Error },

    #[error("cannot create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("file is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("markdown rendering failed: {0}")]
    Render(String),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
