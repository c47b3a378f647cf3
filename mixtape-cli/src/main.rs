//! Mixtape — play templated messages through a pluggable sink.
//!
//! # Usage
//!
//! ```text
//! mixtape playlist.yaml
//! mixtape -p url -u https://collector.example/alerts playlist.yaml
//! mixtape -p syslog --priority warning playlist.yaml
//! mixtape -t ./templates:/usr/share/mixtape playlist.yaml
//! mixtape --list-players
//! mixtape --list-helpers
//! ```

mod players;
mod signal;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use mixtape_playback::{Playlist, Shutdown};
use mixtape_renderer::HELPER_NAMES;
use players::{PlayerArgs, PLAYERS};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "mixtape",
    version,
    about = "Render a playlist of templates and play them through a sink",
    long_about = None,
)]
struct Cli {
    /// Playlist YAML file.
    #[arg(required_unless_present_any = ["list_players", "list_helpers"])]
    playlist: Option<PathBuf>,

    /// Player that receives each rendered track.
    #[arg(short, long, default_value = "print", value_parser = players::names())]
    player: String,

    /// Template search path, separated like PATH. Defaults to the playlist's directory.
    #[arg(short, long, env = "MIXTAPE_TEMPLATE_PATH")]
    template_path: Option<OsString>,

    /// List registered players and exit.
    #[arg(long)]
    list_players: bool,

    /// List template helper functions and exit.
    #[arg(long)]
    list_helpers: bool,

    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    player_args: PlayerArgs,
}

impl Cli {
    /// Directories searched for file templates, in order.
    fn search_path(&self, playlist: &Path) -> Vec<PathBuf> {
        match &self.template_path {
            Some(dirs) => std::env::split_paths(dirs).collect(),
            None => vec![playlist_dir(playlist)],
        }
    }
}

fn playlist_dir(playlist: &Path) -> PathBuf {
    match playlist.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_players {
        for spec in PLAYERS {
            println!("{:<8} {}", spec.name, spec.about);
        }
        return Ok(());
    }
    if cli.list_helpers {
        for name in HELPER_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let playlist_path = cli.playlist.as_deref().context("a playlist file is required")?;
    let playlist = Playlist::load_at(playlist_path)
        .with_context(|| format!("failed to load playlist {}", playlist_path.display()))?;
    let search_path = cli.search_path(playlist_path);

    let spec = players::find(&cli.player)
        .with_context(|| format!("unknown player '{}'", cli.player))?;
    let mut player = spec.build(&cli.player_args)?;

    let shutdown = Shutdown::new();
    signal::install(shutdown.clone())?;

    tracing::info!(
        playlist = %playlist_path.display(),
        player = spec.name,
        mode = %playlist.mode(),
        repeat = playlist.repeats(),
        "starting playback"
    );
    playlist
        .play_until(&mut player, &search_path, &shutdown)
        .with_context(|| format!("playback of {} failed", playlist_path.display()))?;
    Ok(())
}
