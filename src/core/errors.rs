//! Shared error types for the library surface.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading a source file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Python front end rejected the file. Parse errors are out of scope
    /// for the checks themselves; callers typically log and skip the file.
    #[error("Python parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration file errors.
    #[error("configuration error: {0}")]
    Config(String),
}
