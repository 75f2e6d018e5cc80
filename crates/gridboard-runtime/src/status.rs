#![forbid(unsafe_code)]

//! Short-lived status messages.
//!
//! A status message reports the outcome of a sync operation ("Widget added
//! to 2 other layouts") and disappears after a fixed display duration. Time
//! is supplied by the caller as a monotonic [`Duration`] so expiry is
//! deterministic under a host-driven clock.
//!
//! Status messages are pure feedback: nothing here touches persisted state.

use std::time::Duration;

/// Default display duration for a status message.
pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_secs(3);

/// Visual tone of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    /// Neutral information.
    #[default]
    Info,
    /// Something was written or synced.
    Success,
}

/// One displayed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text.
    pub text: String,
    /// Tone for styling.
    pub tone: StatusTone,
    shown_at: Duration,
    duration: Duration,
}

impl StatusMessage {
    /// Whether the message has outlived its display duration at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.shown_at) >= self.duration
    }

    /// Display time left at `now`.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.duration
            .saturating_sub(now.saturating_sub(self.shown_at))
    }
}

/// Holder for at most one visible status message.
///
/// Showing a new message replaces the current one and restarts the timer.
#[derive(Debug, Clone)]
pub struct StatusLine {
    current: Option<StatusMessage>,
    duration: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_DURATION)
    }
}

impl StatusLine {
    /// Status line with a fixed display duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Configured display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `text` starting at `now`.
    pub fn show(&mut self, text: impl Into<String>, tone: StatusTone, now: Duration) {
        self.current = Some(StatusMessage {
            text: text.into(),
            tone,
            shown_at: now,
            duration: self.duration,
        });
    }

    /// Drop the message if it expired. Returns `true` when one was removed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.current.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    /// The visible message at `now`, if any.
    #[must_use]
    pub fn visible(&self, now: Duration) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|m| !m.is_expired(now))
    }

    /// Remove any message immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
