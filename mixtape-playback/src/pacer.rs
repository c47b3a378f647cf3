//! Pausing between tracks, and stopping playback from outside.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;

/// Pause and stop capability used by the playback loop.
pub trait Pacer {
    /// Block for `delay`. Returns `false` when playback must stop now.
    fn pause(&self, delay: Duration) -> bool;

    /// Checked at every cycle boundary.
    fn should_stop(&self) -> bool;
}

/// Cancellation token shared between the playback thread and whoever wants
/// to stop it (signal handler, test, supervisor).
///
/// Triggering wakes any pause in progress.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Pacer for Shutdown {
    fn pause(&self, delay: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        if delay.is_zero() {
            return !*stopped;
        }
        let (stopped, _) = cvar
            .wait_timeout_while(stopped, delay, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        !*stopped
    }

    fn should_stop(&self) -> bool {
        self.is_triggered()
    }
}
