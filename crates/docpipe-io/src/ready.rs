//! Readiness: blocking on a sibling stage's completion signal.
//!
//! The wait has no timeout. A stage that never signals keeps the caller
//! polling until the process is stopped from outside.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

/// A condition a stage waits on before it starts.
///
/// Implementations only answer "ready yet?"; the polling cadence belongs to
/// [`wait_until_ready`].
pub trait Readiness {
    /// Check the condition once.
    fn is_ready(&self) -> Result<bool>;

    /// Human-readable name of what is awaited, used in log lines.
    fn describe(&self) -> String;
}

/// Ready once a marker file exists.
#[derive(Debug, Clone)]
pub struct MarkerFile {
    path: PathBuf,
}

impl MarkerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Readiness for MarkerFile {
    fn is_ready(&self) -> Result<bool> {
        self.path
            .try_exists()
            .with_context(|| format!("Failed to check {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Block until `ready` reports true, sleeping `interval` between checks.
pub fn wait_until_ready(ready: &dyn Readiness, interval: Duration) -> Result<u64> {
    wait_until_ready_with(ready, interval, thread::sleep)
}

/// [`wait_until_ready`] with an injectable sleep.
///
/// Returns the number of sleeps performed (0 when already ready).
pub fn wait_until_ready_with(
    ready: &dyn Readiness,
    interval: Duration,
    mut sleep: impl FnMut(Duration),
) -> Result<u64> {
    if ready.is_ready()? {
        return Ok(0);
    }

    let awaited = ready.describe();
    tracing::info!(
        waiting_for = %awaited,
        interval_ms = interval.as_millis() as u64,
        "waiting for upstream stage"
    );

    let mut polls = 0u64;
    loop {
        sleep(interval);
        polls += 1;
        if ready.is_ready()? {
            tracing::info!(waiting_for = %awaited, polls, "upstream stage ready");
            return Ok(polls);
        }
        tracing::debug!(waiting_for = %awaited, polls, "still waiting");
    }
}
