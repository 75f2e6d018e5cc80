#![forbid(unsafe_code)]

//! Gridboard Runtime
//!
//! Persistence and synchronization of per-bucket dashboard layouts.
//!
//! # Key Components
//!
//! - [`DashboardController`] - owns the active layout and applies the
//!   cross-bucket policies (fan-out, override-defaults)
//! - [`LayoutStore`] - fail-soft persistence capability, implemented by
//!   [`PersistentLayoutStore`] over any [`StorageBackend`]
//! - [`StatusLine`] - ephemeral feedback with deterministic expiry
//! - [`DashboardConfig`] - builder and environment configuration
//!
//! # How it fits in the system
//! `gridboard-core` defines widgets and buckets, `gridboard-layout` decides
//! which bucket a viewport falls into, and this crate keeps each bucket's
//! layout on disk (or in memory) in step with what the user does. The host
//! crate drives it from events and renders the result.

pub mod config;
pub mod controller;
pub mod layout_store;
pub mod status;

pub use config::{ConfigError, ConfigParse, DashboardConfig};
pub use controller::{
    DashboardController, DebugReport, LayoutInfo, NEW_WIDGET_TITLE, SyncKind, SyncReport,
};
#[cfg(feature = "state-persistence")]
pub use layout_store::{FileStorage, default_path_for_app};
pub use layout_store::{
    BucketRecord, LAYOUTS_KEY, LayoutRecords, LayoutStore, MemoryStorage, PersistentLayoutStore,
    SAVED_STATUS_KEY, StorageBackend, StorageError, StorageResult, is_restorable,
};
pub use status::{DEFAULT_STATUS_DURATION, StatusLine, StatusMessage, StatusTone};
