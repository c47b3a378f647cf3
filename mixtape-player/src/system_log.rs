//! [`SyslogPlayer`] — sends each rendered track to the local system log.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use syslog::{Facility, Formatter3164, Logger, LoggerBackend};

use crate::error::PlayerError;
use crate::player::Player;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Syslog priority, most to least severe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    #[default]
    Info,
    Debug,
}

impl Severity {
    /// All severities in RFC 5424 order (numeric code 0 through 7).
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Emergency,
            Severity::Alert,
            Severity::Critical,
            Severity::Error,
            Severity::Warning,
            Severity::Notice,
            Severity::Info,
            Severity::Debug,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert     => "alert",
            Severity::Critical  => "critical",
            Severity::Error     => "error",
            Severity::Warning   => "warning",
            Severity::Notice    => "notice",
            Severity::Info      => "info",
            Severity::Debug     => "debug",
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Parse a severity, falling back to [`Severity::Info`] when the value is
    /// missing or unrecognised.
    pub fn parse_lenient(value: Option<&str>) -> Severity {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" | "emerg" | "panic" | "0" => Ok(Severity::Emergency),
            "alert" | "1" => Ok(Severity::Alert),
            "critical" | "crit" | "2" => Ok(Severity::Critical),
            "error" | "err" | "3" => Ok(Severity::Error),
            "warning" | "warn" | "4" => Ok(Severity::Warning),
            "notice" | "5" => Ok(Severity::Notice),
            "info" | "informational" | "6" => Ok(Severity::Info),
            "debug" | "7" => Ok(Severity::Debug),
            other => Err(format!(
                "unknown syslog priority '{other}'; expected: emergency, alert, critical, error, warning, notice, info, debug"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// SyslogPlayer
// ---------------------------------------------------------------------------

/// Logs each track under `ident` at a fixed severity, facility `user`.
///
/// The connection to the local syslog socket is opened in [`SyslogPlayer::new`]
/// and closed when the player is dropped.
pub struct SyslogPlayer {
    logger: Logger<LoggerBackend, Formatter3164>,
    ident: String,
    severity: Severity,
}

impl SyslogPlayer {
    pub fn new(ident: impl Into<String>, severity: Severity) -> Result<Self, PlayerError> {
        let ident = ident.into();
        let logger = syslog::unix(formatter(&ident)).map_err(|e| PlayerError::Syslog(e.to_string()))?;
        Ok(SyslogPlayer { logger, ident, severity })
    }

    /// Like [`SyslogPlayer::new`], logging to the Unix socket at `socket`
    /// instead of the system default.
    pub fn with_socket(
        ident: impl Into<String>,
        severity: Severity,
        socket: impl AsRef<Path>,
    ) -> Result<Self, PlayerError> {
        let ident = ident.into();
        let logger = syslog::unix_custom(formatter(&ident), socket.as_ref())
            .map_err(|e| PlayerError::Syslog(e.to_string()))?;
        Ok(SyslogPlayer { logger, ident, severity })
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

fn formatter(ident: &str) -> Formatter3164 {
    Formatter3164 {
        facility: Facility::LOG_USER,
        hostname: None,
        process: ident.to_string(),
        pid: std::process::id(),
    }
}

impl fmt::Debug for SyslogPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyslogPlayer")
            .field("ident", &self.ident)
            .field("severity", &self.severity)
            .finish()
    }
}

impl Player for SyslogPlayer {
    fn play(&mut self, rendered: &str) -> Result<(), PlayerError> {
        let logger = &mut self.logger;
        let sent = match self.severity {
            Severity::Emergency => logger.emerg(rendered),
            Severity::Alert     => logger.alert(rendered),
            Severity::Critical  => logger.crit(rendered),
            Severity::Error     => logger.err(rendered),
            Severity::Warning   => logger.warning(rendered),
            Severity::Notice    => logger.notice(rendered),
            Severity::Info      => logger.info(rendered),
            Severity::Debug     => logger.debug(rendered),
        };
        sent.map_err(|e| PlayerError::Syslog(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("emergency", Severity::Emergency)]
    #[case("EMERG", Severity::Emergency)]
    #[case("alert", Severity::Alert)]
    #[case("crit", Severity::Critical)]
    #[case("error", Severity::Error)]
    #[case("warn", Severity::Warning)]
    #[case("notice", Severity::Notice)]
    #[case(" info ", Severity::Info)]
    #[case("7", Severity::Debug)]
    fn parses_names_aliases_and_codes(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>().unwrap(), expected);
    }

    #[test]
    fn unknown_or_missing_falls_back_to_info() {
        assert_eq!(Severity::parse_lenient(None), Severity::Info);
        assert_eq!(Severity::parse_lenient(Some("loud")), Severity::Info);
        assert_eq!(Severity::parse_lenient(Some("8")), Severity::Info);
        assert_eq!(Severity::parse_lenient(Some("notice")), Severity::Notice);
    }

    #[test]
    fn codes_follow_rfc_order() {
        for (code, severity) in Severity::all().iter().enumerate() {
            assert_eq!(severity.code() as usize, code);
            assert_eq!(severity.name().parse::<Severity>().unwrap(), *severity);
        }
        assert!(Severity::Emergency < Severity::Debug);
    }
}
