//! [`PrintPlayer`] — writes each rendered track as a line.

use std::io::{self, Stdout, Write};

use crate::error::PlayerError;
use crate::player::Player;

/// Writes `rendered` followed by `\n` to a stream, flushing after each track.
#[derive(Debug)]
pub struct PrintPlayer<W: Write = Stdout> {
    out: W,
}

impl PrintPlayer<Stdout> {
    /// Print to standard output.
    pub fn stdout() -> Self {
        PrintPlayer { out: io::stdout() }
    }
}

impl Default for PrintPlayer<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> PrintPlayer<W> {
    pub fn new(out: W) -> Self {
        PrintPlayer { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Player for PrintPlayer<W> {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        writeln!(self.out, "{rendered}")?;
        self.out.flush()?;
        Ok(())
    }
}
