//! The [`Player`] trait — the only contract between playback and a sink.

use crate::error::PlayerError;

/// A destination for rendered track text.
///
/// Implementations own whatever resource they deliver to (stream, HTTP agent,
/// log connection) and release it on drop.
pub trait Player {
    /// Consume one rendered track.
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        (**self).play(rendered)
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        (**self).play(rendered)
    }
}
