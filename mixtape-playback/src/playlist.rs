//! [`Playlist`] — validated configuration plus the engine that plays it.
//!
//! ## `play` — 3 phases
//!
//! 1. Build a [`TemplateLibrary`] on the template search path.
//! 2. Load every track once: compile inline sources, resolve and compile
//!    file sources. Any failure aborts before the first track is played.
//! 3. Run cycles: order the tracks (config order, or a fresh shuffle per
//!    cycle in random mode), render and play each one, pausing `delay`
//!    between tracks. The last track of a non-repeating playlist is not
//!    followed by a pause. With `repeat`, cycles continue until the
//!    [`Pacer`] asks to stop.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::seq::SliceRandom;

use mixtape_core::{config, ConfigError, Mode, PlaylistConfig, TrackEntry};
use mixtape_player::Player;
use mixtape_renderer::{TemplateLibrary, Track};

use crate::error::PlaylistError;
use crate::pacer::{Pacer, Shutdown};

/// A playlist ready to be played any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    config: PlaylistConfig,
}

impl Playlist {
    pub fn new(config: PlaylistConfig) -> Self {
        Playlist { config }
    }

    /// Validate playlist YAML held in memory.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        config::parse_str(yaml).map(Playlist::new)
    }

    /// Validate playlist YAML from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        config::from_reader(reader).map(Playlist::new)
    }

    /// Load and validate a playlist file.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        config::load_at(path).map(Playlist::new)
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn delay(&self) -> Duration {
        self.config.delay()
    }

    pub fn repeats(&self) -> bool {
        self.config.repeat
    }

    pub fn entries(&self) -> &[TrackEntry] {
        &self.config.tracks
    }

    /// Play through `player`, resolving file templates on `template_path`.
    ///
    /// Returns after one cycle unless the playlist repeats, in which case it
    /// only returns on error.
    pub fn play<P>(&self, player: &mut P, template_path: &[PathBuf]) -> Result<(), PlaylistError>
    where
        P: Player + ?Sized,
    {
        self.play_until(player, template_path, &Shutdown::new())
    }

    /// Like [`Playlist::play`], pausing and stopping through `pacer`.
    ///
    /// `pacer` is checked before every cycle; a pause it cuts short ends
    /// playback. Both cases return `Ok(())`.
    pub fn play_until<P, C>(
        &self,
        player: &mut P,
        template_path: &[PathBuf],
        pacer: &C,
    ) -> Result<(), PlaylistError>
    where
        P: Player + ?Sized,
        C: Pacer + ?Sized,
    {
        let mut library = TemplateLibrary::new(template_path);
        let tracks = self.load_tracks(&mut library)?;

        if tracks.is_empty() {
            tracing::warn!("playlist has no tracks; nothing to play");
            return Ok(());
        }

        let mut order: Vec<usize> = (0..tracks.len()).collect();
        let mut cycle: u64 = 0;
        loop {
            if pacer.should_stop() {
                tracing::info!(cycle, "stop requested; ending playback");
                return Ok(());
            }
            cycle += 1;
            if self.config.mode == Mode::Random {
                order.shuffle(&mut rand::thread_rng());
            }
            tracing::info!(cycle, mode = %self.config.mode, tracks = tracks.len(), "starting cycle");

            if !self.play_cycle(&tracks, &order, player, pacer)? {
                tracing::info!(cycle, "stop requested during pause; ending playback");
                return Ok(());
            }
            if !self.config.repeat {
                return Ok(());
            }
        }
    }

    /// Compile every track once. Inline sources are registered first so the
    /// returned tracks can share an immutable borrow of `library`.
    fn load_tracks<'lib>(
        &self,
        library: &'lib mut TemplateLibrary,
    ) -> Result<Vec<Track<'lib>>, PlaylistError> {
        let entries = &self.config.tracks;
        library
            .add_inline_sources(entries.iter().map(|e| &e.source))
            .map_err(PlaylistError::Load)?;
        let library: &'lib TemplateLibrary = library;
        let tracks = library
            .tracks(entries.iter().map(|e| (&e.source, &e.vars)))
            .map_err(PlaylistError::Load)?;
        tracing::debug!(count = tracks.len(), search_path = ?library.search_path(), "tracks loaded");
        Ok(tracks)
    }

    /// One pass over `tracks` in `order`. Returns `false` if the pacer
    /// stopped playback during a pause.
    fn play_cycle<P, C>(
        &self,
        tracks: &[Track<'_>],
        order: &[usize],
        player: &mut P,
        pacer: &C,
    ) -> Result<bool, PlaylistError>
    where
        P: Player + ?Sized,
        C: Pacer + ?Sized,
    {
        let delay = self.delay();
        let last = order.len() - 1;
        for (position, &index) in order.iter().enumerate() {
            let track = &tracks[index];
            let rendered = track.render().map_err(PlaylistError::Render)?;
            tracing::debug!(track = index, template = track.name(), bytes = rendered.len(), "playing track");
            player.play(&rendered)?;

            if (position < last || self.config.repeat) && !pacer.pause(delay) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
