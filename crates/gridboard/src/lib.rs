#![forbid(unsafe_code)]

//! Gridboard public facade crate.
//!
//! A responsive widget dashboard that keeps an independent widget order for
//! each column count (1 to 4) and synchronizes membership changes across
//! them. This crate re-exports the common types from the internal crates
//! and offers a prelude plus logging setup.
//!
//! # Example
//!
//! ```
//! use gridboard::prelude::*;
//!
//! let config = DashboardConfig::new().persist(false);
//! let mut host = DashboardHost::from_config(&config, 1024);
//! host.push_event(HostEvent::SetColumns(Bucket::Two));
//! host.step();
//! assert_eq!(host.snapshot().columns_label, "2 Columns (Manual)");
//! ```

use std::fmt;

pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use gridboard_core::{
    Bucket, DragEnd, HostEvent, IdGenerator, SequentialIds, TimestampIds, WidgetData, WidgetId,
    WidgetKind, WidgetList, default_widgets,
};

// --- Layout re-exports -----------------------------------------------------

pub use gridboard_layout::{Breakpoints, GridCell, GridPlacement, ViewportClassifier, classify};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "persistence")]
pub use gridboard_runtime::FileStorage;
pub use gridboard_runtime::{
    ConfigError, DashboardConfig, DashboardController, LayoutStore, MemoryStorage,
    PersistentLayoutStore, StatusTone, StorageBackend, StorageError, SyncKind, SyncReport,
};

// --- Widget and host re-exports --------------------------------------------

pub use gridboard_web::{DashboardHost, DashboardSnapshot, DeterministicClock, StepResult, Tile};
pub use gridboard_widgets::{LiveWidgets, View, render};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for gridboard apps.
#[derive(Debug)]
pub enum Error {
    /// Storage backend failure surfaced outside the fail-soft store.
    Storage(StorageError),
    /// Rejected configuration value.
    Config(ConfigError),
    /// Logging could not be set up.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "storage: {err}"),
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Logging(msg) => write!(f, "logging: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for gridboard APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Read configuration from the environment, rejecting invalid values.
///
/// [`DashboardConfig::from_env`] is the lenient variant that logs and
/// ignores them.
pub fn config_from_env_strict() -> Result<DashboardConfig> {
    let parsed = DashboardConfig::from_env_with_diagnostics();
    match parsed.errors.into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(parsed.config),
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Breakpoints, Bucket, DashboardConfig, DashboardController, DashboardHost,
        DashboardSnapshot, DragEnd, Error, HostEvent, LayoutStore, PersistentLayoutStore, Result,
        SyncReport, WidgetData, WidgetId,
    };

    pub use crate::{core, layout, runtime, web, widgets};
}

pub use gridboard_core as core;
pub use gridboard_layout as layout;
pub use gridboard_runtime as runtime;
pub use gridboard_web as web;
pub use gridboard_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_display_and_source() {
        let err = Error::from(StorageError::Unavailable("disk gone".into()));
        assert!(err.to_string().starts_with("storage: "));
        assert!(err.source().is_some());
        assert!(Error::Logging("x".into()).source().is_none());
    }

    #[cfg(feature = "persistence")]
    #[test]
    fn file_backed_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::new().storage_path(dir.path().join("dash.json"));
        {
            let mut host = DashboardHost::from_config(&config, 600);
            host.push_event(HostEvent::Drag(DragEnd::new(0, 1)));
            host.step();
        }
        let host = DashboardHost::from_config(&config, 600);
        assert_eq!(host.snapshot().tiles[0].number, 2);
        assert!(host.controller().store().is_saved(Bucket::Two));
    }
}
