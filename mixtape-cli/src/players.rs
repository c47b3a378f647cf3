//! Player registry — every sink the `mixtape` binary can drive, with the
//! options each one needs.
//!
//! New sinks are added by appending to [`PLAYERS`] and, if they take options,
//! flattening another `Args` group into [`PlayerArgs`].

use anyhow::{Context, Result};
use clap::Args;

use mixtape_player::{HttpPlayer, Player, PrintPlayer, Severity, SyslogPlayer};

/// A named player and the function that builds it from the parsed options.
pub struct PlayerSpec {
    pub name: &'static str,
    pub about: &'static str,
    build: fn(&PlayerArgs) -> Result<Box<dyn Player>>,
}

impl PlayerSpec {
    pub fn build(&self, args: &PlayerArgs) -> Result<Box<dyn Player>> {
        (self.build)(args).with_context(|| format!("failed to set up the '{}' player", self.name))
    }
}

pub const PLAYERS: &[PlayerSpec] = &[
    PlayerSpec {
        name: "print",
        about: "write each track to stdout, one per line",
        build: build_print,
    },
    PlayerSpec {
        name: "url",
        about: "POST each track as JSON to --url",
        build: build_url,
    },
    PlayerSpec {
        name: "syslog",
        about: "send each track to the local system log",
        build: build_syslog,
    },
];

pub fn names() -> Vec<&'static str> {
    PLAYERS.iter().map(|p| p.name).collect()
}

pub fn find(name: &str) -> Option<&'static PlayerSpec> {
    PLAYERS.iter().find(|p| p.name == name)
}

// ---------------------------------------------------------------------------
// Per-player options
// ---------------------------------------------------------------------------

/// Options for every registered player; only the selected player's are read.
#[derive(Args, Debug, Default)]
pub struct PlayerArgs {
    #[command(flatten)]
    pub url: UrlArgs,

    #[command(flatten)]
    pub syslog: SyslogArgs,
}

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "url player")]
pub struct UrlArgs {
    /// Endpoint that receives each rendered track.
    #[arg(short = 'u', long, env = "MIXTAPE_URL", required_if_eq("player", "url"))]
    pub url: Option<String>,

    /// Basic auth user; ignored unless --password is also set.
    #[arg(short = 'U', long, env = "MIXTAPE_USER")]
    pub user: Option<String>,

    /// Basic auth password; ignored unless --user is also set.
    #[arg(short = 'P', long, env = "MIXTAPE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
#[command(next_help_heading = "syslog player")]
pub struct SyslogArgs {
    /// Identity the messages are logged under.
    #[arg(long, default_value = "mixtape")]
    pub ident: String,

    /// Priority: emergency, alert, critical, error, warning, notice, info, debug.
    /// Anything else falls back to info.
    #[arg(long)]
    pub priority: Option<String>,
}

impl SyslogArgs {
    pub fn severity(&self) -> Severity {
        let severity = Severity::parse_lenient(self.priority.as_deref());
        if let Some(priority) = &self.priority {
            if priority.parse::<Severity>().is_err() {
                tracing::warn!(%priority, fallback = %severity, "unknown syslog priority");
            }
        }
        severity
    }
}

impl Default for SyslogArgs {
    fn default() -> Self {
        SyslogArgs { ident: "mixtape".to_string(), priority: None }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

fn build_print(_args: &PlayerArgs) -> Result<Box<dyn Player>> {
    Ok(Box::new(PrintPlayer::stdout()))
}

fn build_url(args: &PlayerArgs) -> Result<Box<dyn Player>> {
    let url = args.url.url.clone().context("--url is required")?;
    let player = HttpPlayer::new(url).with_credentials(args.url.user.clone(), args.url.password.clone());
    tracing::debug!(?player, "url player ready");
    Ok(Box::new(player))
}

fn build_syslog(args: &PlayerArgs) -> Result<Box<dyn Player>> {
    let player = SyslogPlayer::new(args.syslog.ident.clone(), args.syslog.severity())?;
    tracing::debug!(?player, "syslog player ready");
    Ok(Box::new(player))
}
