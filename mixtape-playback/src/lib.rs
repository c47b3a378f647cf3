//! # mixtape-playback
//!
//! The playback engine. Build a [`Playlist`] from YAML, pick a
//! [`mixtape_player::Player`], and call [`Playlist::play`] (or
//! [`Playlist::play_until`] with a [`Shutdown`] token for repeating
//! playlists that must stop cleanly).

pub mod error;
pub mod pacer;
pub mod playlist;

pub use error::PlaylistError;
pub use pacer::{Pacer, Shutdown};
pub use playlist::Playlist;
