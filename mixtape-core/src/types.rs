//! Domain types for a playlist configuration.
//!
//! All path fields use `PathBuf`. The types only deserialize: a document is
//! validated once, on the way in, and never written back.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Variables bound to a single track, keyed by template variable name.
pub type Vars = BTreeMap<String, serde_yaml::Value>;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Ordering policy applied to every playback cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Configuration order, identical for every cycle.
    #[default]
    Sequential,
    /// A fresh uniform shuffle at the start of every cycle.
    Random,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Sequential => "sequential",
            Mode::Random => "random",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Track entries
// ---------------------------------------------------------------------------

/// Where the template source of a track comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// Template file name, resolved against the template search path.
    File(PathBuf),
    /// Inline template source.
    Inline(String),
}

/// One entry of `playlist.tracks`: a template source plus its variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTrackEntry")]
pub struct TrackEntry {
    pub source: TrackSource,
    pub vars: Vars,
}

impl TrackEntry {
    /// Inline track with no variables.
    pub fn inline(source: impl Into<String>) -> Self {
        Self { source: TrackSource::Inline(source.into()), vars: Vars::new() }
    }

    /// File track with no variables.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { source: TrackSource::File(path.into()), vars: Vars::new() }
    }

    /// Builder-style helper binding one variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

/// Wire shape of a track entry before the `file`/`string` exclusivity check.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTrackEntry {
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    string: Option<String>,
    #[serde(default)]
    vars: Vars,
}

impl TryFrom<RawTrackEntry> for TrackEntry {
    type Error = String;

    fn try_from(raw: RawTrackEntry) -> Result<Self, Self::Error> {
        let source = match (raw.file, raw.string) {
            (Some(file), None) => TrackSource::File(PathBuf::from(file)),
            (None, Some(string)) => TrackSource::Inline(string),
            (Some(_), Some(_)) => {
                return Err("track entry has both `file` and `string`; exactly one is allowed".into())
            }
            (None, None) => {
                return Err("track entry needs exactly one of `file` or `string`".into())
            }
        };
        Ok(TrackEntry { source, vars: raw.vars })
    }
}

// ---------------------------------------------------------------------------
// Playlist
// ---------------------------------------------------------------------------

/// The validated `playlist` mapping, with defaults applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistConfig {
    #[serde(default)]
    pub mode: Mode,
    /// Seconds to wait between two consecutive tracks.
    #[serde(default)]
    pub delay: u64,
    #[serde(default)]
    pub repeat: bool,
    pub tracks: Vec<TrackEntry>,
}

impl PlaylistConfig {
    /// `delay` as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay)
    }
}

/// Top-level document: a single `playlist` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaylistDocument {
    pub playlist: PlaylistConfig,
}
