#![forbid(unsafe_code)]

//! `gridboard-web` runs a dashboard session driven by its embedding host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes resize, drag and
//!   button events.
//! - **Deterministic time**: the host advances a monotonic clock explicitly;
//!   weather refreshes and status expiry happen on [`DashboardHost::step`].
//! - **Headless output**: each step can produce a [`DashboardSnapshot`] that
//!   a presentational layer (or a test) reads.

pub mod host;
pub mod snapshot;

use core::time::Duration;

pub use host::{DashboardHost, StepResult, WEATHER_REFRESH_INTERVAL};
pub use snapshot::{DashboardSnapshot, StatusSnapshot, Tile};

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }
}
