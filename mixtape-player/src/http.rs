//! [`HttpPlayer`] — POSTs each rendered track to a URL.
//!
//! Request shape:
//! - method `POST`, body = rendered text verbatim;
//! - `Content-Type: application/json`;
//! - `Authorization: Basic ...` only when both user and password are set;
//! - 30 second timeout for the whole request.
//!
//! The response is not inspected beyond its status line. Any HTTP status,
//! including 4xx/5xx, counts as delivered; only transport failures
//! (connection, TLS, timeout) are errors.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::PlayerError;
use crate::player::Player;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpPlayer {
    agent: ureq::Agent,
    url: String,
    authorization: Option<String>,
}

impl HttpPlayer {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        HttpPlayer { agent, url: url.into(), authorization: None }
    }

    /// Enable basic auth. Ignored unless both `user` and `password` are given.
    pub fn with_credentials(mut self, user: Option<String>, password: Option<String>) -> Self {
        self.authorization = match (user, password) {
            (Some(user), Some(password)) => Some(basic_authorization(&user, &password)),
            _ => None,
        };
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn uses_basic_auth(&self) -> bool {
        self.authorization.is_some()
    }
}

impl std::fmt::Debug for HttpPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPlayer")
            .field("url", &self.url)
            .field("basic_auth", &self.uses_basic_auth())
            .finish()
    }
}

impl Player for HttpPlayer {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        let mut request = self.agent.post(&self.url).set("Content-Type", "application/json");
        if let Some(authorization) = &self.authorization {
            request = request.set("Authorization", authorization);
        }
        match request.send_string(rendered) {
            Ok(response) => {
                tracing::info!(url = %self.url, status = response.status(), "delivered");
                Ok(())
            }
            Err(ureq::Error::Status(status, _)) => {
                tracing::warn!(url = %self.url, status, "delivered; endpoint answered with error status");
                Ok(())
            }
            Err(err) => Err(PlayerError::Delivery { url: self.url.clone(), source: Box::new(err) }),
        }
    }
}

fn basic_authorization(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_authorization_encodes_user_and_password() {
        assert_eq!(basic_authorization("Aladdin", "open sesame"), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn credentials_need_both_parts() {
        let player = HttpPlayer::new("http://localhost").with_credentials(Some("u".into()), None);
        assert!(!player.uses_basic_auth());
        let player = HttpPlayer::new("http://localhost").with_credentials(None, Some("p".into()));
        assert!(!player.uses_basic_auth());
        let player = HttpPlayer::new("http://localhost")
            .with_credentials(Some("u".into()), Some("p".into()));
        assert!(player.uses_basic_auth());
    }

    #[test]
    fn debug_does_not_leak_credentials() {
        let player = HttpPlayer::new("http://localhost")
            .with_credentials(Some("user".into()), Some("hunter2".into()));
        let shown = format!("{player:?}");
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("Basic"));
    }
}
