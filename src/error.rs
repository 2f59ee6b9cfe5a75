//! Error types for netrc-auth-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a credential store from an explicit path.
///
/// The host-resolution entry points never return these; they degrade to an
/// empty store instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Credential store not found.
    #[error("credential store not found: {0}")]
    FileNotFound(PathBuf),

    /// Credential store exists but could not be opened.
    #[error("failed to open credential store {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for netrc-auth-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
