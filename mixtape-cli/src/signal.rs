//! Signal thread — turns Ctrl-C or SIGTERM into a [`Shutdown`] trigger.
//!
//! Playback is blocking and synchronous, so the async signal listeners run on
//! their own thread with a current-thread tokio runtime. Handlers are
//! registered before [`install`] returns, so a signal sent once playback has
//! started is never missed.

use std::io;
use std::thread;

use anyhow::{Context, Result};

use mixtape_playback::Shutdown;

/// Spawn the signal thread. It triggers `shutdown` once, on the first signal.
pub fn install(shutdown: Shutdown) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build signal runtime")?;
    let listener = {
        let _guard = runtime.enter();
        Listener::register().context("failed to register signal handlers")?
    };

    thread::Builder::new()
        .name("mixtape-signals".to_string())
        .spawn(move || {
            runtime.block_on(async move {
                match listener.recv().await {
                    Ok(signal) => {
                        tracing::info!(signal, "received signal, stopping playback");
                        shutdown.trigger();
                    }
                    Err(err) => tracing::warn!(error = %err, "signal handler failed"),
                }
            })
        })
        .context("failed to spawn signal thread")?;
    Ok(())
}

#[cfg(unix)]
struct Listener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Listener {
    fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Listener {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(mut self) -> io::Result<&'static str> {
        tokio::select! {
            _ = self.interrupt.recv() => Ok("SIGINT"),
            _ = self.terminate.recv() => Ok("SIGTERM"),
        }
    }
}

#[cfg(not(unix))]
struct Listener;

#[cfg(not(unix))]
impl Listener {
    fn register() -> io::Result<Self> {
        Ok(Listener)
    }

    async fn recv(self) -> io::Result<&'static str> {
        tokio::signal::ctrl_c().await.map(|()| "ctrl-c")
    }
}
