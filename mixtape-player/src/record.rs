//! [`RecordPlayer`] — keeps every rendered track in memory.

use crate::error::PlayerError;
use crate::player::Player;

/// Appends each rendered track to an ordered list. Used by tests and dry runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPlayer {
    records: Vec<String>,
}

impl RecordPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks received so far, in play order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn into_records(self) -> Vec<String> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Player for RecordPlayer {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        self.records.push(rendered.to_owned());
        Ok(())
    }
}
