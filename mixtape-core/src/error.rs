//! Error types for mixtape-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while reading and validating a playlist.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the playlist.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Playlist text failed validation (syntax, schema, types or defaults).
    #[error("invalid playlist: {0}")]
    Invalid(#[from] serde_yaml::Error),

    /// Same as [`ConfigError::Invalid`], for a playlist read from a file.
    #[error("invalid playlist at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The playlist file did not exist.
    #[error("playlist not found at {path}")]
    NotFound { path: PathBuf },
}
