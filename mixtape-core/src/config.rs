//! Playlist YAML parsing and validation.
//!
//! # Document shape
//!
//! ```yaml
//! playlist:
//!   mode: sequential      # or random; default sequential
//!   delay: 1              # seconds, non-negative; default 0
//!   repeat: false         # default false
//!   tracks:
//!     - file: alert.json.j2
//!     - string: "foo:{{bar}}"
//!       vars:
//!         bar: 123
//! ```
//!
//! Validation is all-or-nothing: every entry point returns either a fully
//! defaulted [`PlaylistConfig`] or a [`ConfigError`].

use std::io::Read;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::{PlaylistConfig, PlaylistDocument};

/// Parse and validate playlist YAML held in memory.
pub fn parse_str(yaml: &str) -> Result<PlaylistConfig, ConfigError> {
    let doc: PlaylistDocument = serde_yaml::from_str(yaml)?;
    Ok(doc.playlist)
}

/// Parse and validate playlist YAML from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<PlaylistConfig, ConfigError> {
    let doc: PlaylistDocument = serde_yaml::from_reader(reader)?;
    Ok(doc.playlist)
}

/// Load and validate a playlist file.
///
/// Returns `ConfigError::NotFound` if absent, `ConfigError::Parse` (with path
/// and line context from serde_yaml) if the contents are invalid.
pub fn load_at(path: &Path) -> Result<PlaylistConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io { path: path.to_path_buf(), source: e })?;
    serde_yaml::from_str::<PlaylistDocument>(&contents)
        .map(|doc| doc.playlist)
        .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: e })
}
