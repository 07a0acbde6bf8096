//! Error types for a retouch run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RetouchError {
    #[error("input file `{}` not found", .0.display())]
    MissingInput(PathBuf),

    #[error("IO error when reading `{}`", .0.display())]
    Read(PathBuf, #[source] io::Error),

    #[error("IO error when writing `{}`", .0.display())]
    Write(PathBuf, #[source] io::Error),

    #[error("failed to serialize the retouched page")]
    Serialize(#[source] io::Error),

    #[error("rewrite rules matched nothing: {}", .0.join(", "))]
    Unmatched(Vec<String>),
}
