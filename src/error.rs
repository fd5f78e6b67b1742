//! Error type shared by the library modules.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or writing a version manifest.
#[derive(Debug, Error)]
pub enum VersionsError {
    /// The scan root (or one of its entries) could not be read.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory name is not valid UTF-8 and cannot be written to JSON.
    #[error("Directory name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },

    /// A directory name is not a semantic version (strict mode only).
    #[error("Directory '{name}' is not a valid MAJOR.MINOR.PATCH version: {source}")]
    Parse {
        name: String,
        #[source]
        source: semver::Error,
    },

    #[error("Failed to encode version manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The manifest could not be written to its destination.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
