//! Error types for mixtape-playback.

use thiserror::Error;

use mixtape_core::ConfigError;
use mixtape_player::PlayerError;
use mixtape_renderer::RenderError;

/// All errors that can end a `play` call.
///
/// None of them is retried or logged here; the first one stops playback and
/// is returned to the caller.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The playlist configuration failed validation.
    #[error("playlist configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A template could not be resolved or compiled. Raised before the first
    /// track is played.
    #[error("load error: {0}")]
    Load(#[source] RenderError),

    /// A track failed to render during playback.
    #[error("render error: {0}")]
    Render(#[source] RenderError),

    /// The player could not consume a rendered track.
    #[error("delivery error: {0}")]
    Delivery(#[from] PlayerError),
}
