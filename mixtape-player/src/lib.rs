//! # mixtape-player
//!
//! Sinks for rendered tracks. Playback only ever calls [`Player::play`];
//! constructing a sink and its options is up to the caller.
//!
//! | Sink             | Destination                                   |
//! |------------------|-----------------------------------------------|
//! | [`PrintPlayer`]  | a `Write` stream, one line per track          |
//! | [`RecordPlayer`] | an in-memory `Vec<String>`                    |
//! | [`HttpPlayer`]   | HTTP POST, JSON content type, optional auth   |
//! | [`SyslogPlayer`] | local system log at a fixed [`Severity`]      |

pub mod error;
pub mod http;
pub mod player;
pub mod print;
pub mod record;
pub mod system_log;

pub use error::PlayerError;
pub use http::HttpPlayer;
pub use player::Player;
pub use print::PrintPlayer;
pub use record::RecordPlayer;
pub use system_log::{Severity, SyslogPlayer};
