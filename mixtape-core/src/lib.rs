//! Mixtape core library — playlist configuration types, validation, errors.
//!
//! - [`types`] — configuration model ([`PlaylistConfig`], [`TrackEntry`], [`Mode`])
//! - [`config`] — parse and validate playlist YAML
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{Mode, PlaylistConfig, PlaylistDocument, TrackEntry, TrackSource, Vars};
