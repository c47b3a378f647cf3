//! Error types for mixtape-player.

use thiserror::Error;

/// All errors a sink can raise while consuming rendered text.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Writing to the output stream failed (closed pipe, full disk, ...).
    #[error("output stream error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request could not be delivered: connection, TLS or timeout.
    #[error("delivery to {url} failed: {source}")]
    Delivery {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The system log could not be opened or written.
    #[error("syslog error: {0}")]
    Syslog(String),
}
