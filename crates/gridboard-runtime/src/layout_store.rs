//! Per-bucket layout persistence.
//!
//! This module provides the [`LayoutStore`] seam used by the dashboard
//! controller and its production implementation [`PersistentLayoutStore`],
//! which keeps both persisted records on a pluggable [`StorageBackend`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   PersistentLayoutStore                       │
//! │   - Decodes both blobs into one LayoutRecords map             │
//! │   - Validates restored layouts (all-or-nothing per bucket)    │
//! │   - Read-modify-write of the whole namespace on every save    │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     StorageBackend                            │
//! │   - MemoryStorage: in-memory (testing, ephemeral)             │
//! │   - FileStorage: JSON file (requires state-persistence)       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Persisted Format
//!
//! Two string entries in the backend namespace, both JSON:
//!
//! ```json
//! "dashboard-layouts":      { "1": [ { "id": "1", "type": "number", "title": "Weather", "number": 1 } ] }
//! "dashboard-saved-status": { "1": true }
//! ```
//!
//! In memory they form a single [`LayoutRecords`] map of
//! `Bucket -> BucketRecord { widgets, saved }`, and every write commits
//! both entries in the same `save_all` call.
//!
//! # Design Invariants
//!
//! 1. **Fail soft**: no store operation panics or returns an error to the
//!    controller. Reads degrade to the default widget set, writes to a
//!    logged no-op.
//! 2. **All-or-nothing restore**: one widget with `number` absent or `<= 0`
//!    discards the whole bucket's saved layout for that load.
//! 3. **Whole-namespace writes**: saves rewrite the full entry map the
//!    backend returned, so unrelated keys survive. Inside the two blobs only
//!    the written buckets change; undecodable entries are kept verbatim.
//! 4. **Blunt clear**: [`LayoutStore::clear_all`] erases the entire
//!    namespace, unrelated keys included.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Backend read error | I/O, lock poisoned | Load returns defaults; save skipped |
//! | Malformed blob | Hand-edited or truncated JSON | Blob treated as empty |
//! | Malformed bucket entry | Wrong shape, unknown `type` | That bucket treated as absent, entry kept on rewrite |
//! | Invalid number | `number` absent or `<= 0` | Load returns defaults |
//! | Backend write error | I/O | Logged, in-memory state unaffected |

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};

use gridboard_core::{Bucket, WidgetData, WidgetList, default_widgets};
use serde_json::{Map, Value};

/// Backend key holding the per-bucket widget lists.
pub const LAYOUTS_KEY: &str = "dashboard-layouts";

/// Backend key holding the per-bucket saved flags.
pub const SAVED_STATUS_KEY: &str = "dashboard-saved-status";

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur inside a storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// Serialization or deserialization error.
    Serialization(String),
    /// Storage is corrupted or a lock was poisoned.
    Corruption(String),
    /// Backend is not available.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serialization(_)
            | StorageError::Corruption(_)
            | StorageError::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Storage Backend Trait
// ─────────────────────────────────────────────────────────────────────────────

/// A string-keyed durable namespace, in the spirit of browser local storage.
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Implementation Notes
///
/// - `load_all` returns an empty map on first run.
/// - `save_all` replaces the whole namespace (not a merge) and should be
///   atomic.
/// - `clear` removes everything in the namespace.
pub trait StorageBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load every entry in the namespace.
    fn load_all(&self) -> StorageResult<HashMap<String, String>>;

    /// Replace the namespace with `entries`.
    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()>;

    /// Erase the namespace.
    fn clear(&self) -> StorageResult<()>;

    /// Check if the backend is available and functional.
    fn is_available(&self) -> bool {
        true
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load_all(&self) -> StorageResult<HashMap<String, String>> {
        (**self).load_all()
    }

    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        (**self).save_all(entries)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Storage (always available)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory storage backend for testing and ephemeral dashboards.
///
/// State is lost when the process exits. Wrap it in an [`Arc`] to share one
/// namespace between several stores (simulating a page reload).
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create memory storage pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            data: RwLock::new(entries),
        }
    }

    /// Raw value for `key`, bypassing any decoding.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    /// Overwrite a raw entry.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut guard) = self.data.write() {
            guard.insert(key.into(), value.into());
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn load_all(&self) -> StorageResult<HashMap<String, String>> {
        let guard = self
            .data
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        *guard = entries.clone();
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.clear();
        Ok(())
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.data.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("MemoryStorage")
            .field("entries", &count)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Storage (requires state-persistence feature)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "state-persistence")]
mod file_storage {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// File format for the stored namespace.
    #[derive(Serialize, Deserialize)]
    struct StorageFile {
        /// Format version for future migrations.
        format_version: u32,
        /// Key -> raw string value.
        entries: HashMap<String, String>,
    }

    impl StorageFile {
        const FORMAT_VERSION: u32 = 1;
    }

    /// File-based storage backend.
    ///
    /// The whole namespace lives in one JSON file written with the
    /// write-then-rename pattern.
    ///
    /// # File Format
    ///
    /// ```json
    /// {
    ///   "format_version": 1,
    ///   "entries": {
    ///     "dashboard-layouts": "{\"4\":[...]}",
    ///     "dashboard-saved-status": "{\"4\":true}"
    ///   }
    /// }
    /// ```
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        /// Create a file storage at the given path.
        ///
        /// The file does not need to exist; it will be created on first save.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        /// Storage at `$XDG_STATE_HOME/gridboard/{app_name}/storage.json`,
        /// falling back to `~/.local/state` and then the current directory.
        #[must_use]
        pub fn default_for_app(app_name: &str) -> Self {
            let path = default_path_for_app(app_name);
            Self { path }
        }

        /// Location of the backing file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut tmp = self.path.clone();
            tmp.set_extension("json.tmp");
            tmp
        }
    }

    /// Default storage file location for an app name.
    #[must_use]
    pub fn default_path_for_app(app_name: &str) -> PathBuf {
        state_dir_or_fallback()
            .join("gridboard")
            .join(app_name)
            .join("storage.json")
    }

    fn state_dir_or_fallback() -> PathBuf {
        if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
            return PathBuf::from(state_home);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("state");
        }
        PathBuf::from(".")
    }

    impl StorageBackend for FileStorage {
        fn name(&self) -> &str {
            "FileStorage"
        }

        fn load_all(&self) -> StorageResult<HashMap<String, String>> {
            if !self.path.exists() {
                return Ok(HashMap::new());
            }

            let file = File::open(&self.path)?;
            let reader = BufReader::new(file);
            let stored: StorageFile = serde_json::from_reader(reader).map_err(|e| {
                StorageError::Serialization(format!("failed to parse storage file: {e}"))
            })?;

            if stored.format_version != StorageFile::FORMAT_VERSION {
                tracing::warn!(
                    stored = stored.format_version,
                    expected = StorageFile::FORMAT_VERSION,
                    "storage file format version mismatch, ignoring stored state"
                );
                return Ok(HashMap::new());
            }

            Ok(stored.entries)
        }

        fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }

            let stored = StorageFile {
                format_version: StorageFile::FORMAT_VERSION,
                entries: entries.clone(),
            };

            let tmp_path = self.temp_path();
            {
                let file = File::create(&tmp_path)?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &stored).map_err(|e| {
                    StorageError::Serialization(format!("failed to serialize storage: {e}"))
                })?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }

            fs::rename(&tmp_path, &self.path)?;

            tracing::debug!(
                path = %self.path.display(),
                entries = entries.len(),
                "saved storage namespace"
            );
            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            Ok(())
        }

        fn is_available(&self) -> bool {
            if let Some(parent) = self.path.parent() {
                if !parent.exists() {
                    return fs::create_dir_all(parent).is_ok();
                }
                let probe = parent.join(".gridboard_probe");
                if fs::write(&probe, b"probe").is_ok() {
                    let _ = fs::remove_file(&probe);
                    return true;
                }
            }
            false
        }
    }

    impl fmt::Debug for FileStorage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileStorage")
                .field("path", &self.path)
                .finish()
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use file_storage::{FileStorage, default_path_for_app};

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Everything persisted for one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketRecord {
    /// The persisted widget order, if an entry exists and decodes.
    pub widgets: Option<WidgetList>,
    /// Whether the bucket has been explicitly saved.
    pub saved: bool,
}

/// Decoded view of both persisted blobs.
///
/// The raw maps are kept so that a rewrite only replaces the buckets set
/// through [`LayoutRecords::set_layout`]. Entries that fail to decode and
/// keys that name no bucket are written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRecords {
    buckets: BTreeMap<Bucket, BucketRecord>,
    raw_layouts: Map<String, Value>,
    raw_saved: Map<String, Value>,
    dirty: BTreeSet<Bucket>,
}

impl LayoutRecords {
    /// Decode from a backend namespace. Never fails; bad data is skipped.
    #[must_use]
    pub fn decode(entries: &HashMap<String, String>) -> Self {
        let mut records = Self::default();

        if let Some(map) = entries.get(LAYOUTS_KEY).and_then(|raw| parse_map(LAYOUTS_KEY, raw)) {
            for (key, value) in &map {
                let Some(bucket) = Bucket::from_key(key) else {
                    tracing::debug!(key = %key, "ignoring unknown layout key");
                    continue;
                };
                match serde_json::from_value::<WidgetList>(value.clone()) {
                    Ok(widgets) => records.record_mut(bucket).widgets = Some(widgets),
                    Err(e) => {
                        tracing::warn!(%bucket, error = %e, "malformed layout entry, skipping");
                    }
                }
            }
            records.raw_layouts = map;
        }

        if let Some(map) = entries
            .get(SAVED_STATUS_KEY)
            .and_then(|raw| parse_map(SAVED_STATUS_KEY, raw))
        {
            for (key, value) in &map {
                if let Some(bucket) = Bucket::from_key(key) {
                    records.record_mut(bucket).saved = value.as_bool() == Some(true);
                }
            }
            records.raw_saved = map;
        }

        records
    }

    /// Encode both blobs into `entries`, leaving other keys untouched.
    ///
    /// Only buckets written since decoding are re-encoded; every other entry
    /// of either blob is carried over as it was read.
    pub fn encode_into(&self, entries: &mut HashMap<String, String>) -> StorageResult<()> {
        let mut layouts = self.raw_layouts.clone();
        let mut saved = self.raw_saved.clone();
        for bucket in &self.dirty {
            let Some(record) = self.buckets.get(bucket) else {
                continue;
            };
            let other_bucket = |key: &String, _: &mut Value| Bucket::from_key(key) != Some(*bucket);
            layouts.retain(other_bucket);
            saved.retain(other_bucket);
            if let Some(widgets) = &record.widgets {
                layouts.insert(bucket.key().to_owned(), serde_json::to_value(widgets)?);
            }
            saved.insert(bucket.key().to_owned(), Value::Bool(record.saved));
        }
        entries.insert(
            LAYOUTS_KEY.to_owned(),
            serde_json::to_string(&Value::Object(layouts))?,
        );
        entries.insert(
            SAVED_STATUS_KEY.to_owned(),
            serde_json::to_string(&Value::Object(saved))?,
        );
        Ok(())
    }

    /// Record for `bucket`, if anything was persisted for it.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> Option<&BucketRecord> {
        self.buckets.get(&bucket)
    }

    /// Persisted widget list for `bucket`.
    #[must_use]
    pub fn widgets(&self, bucket: Bucket) -> Option<&WidgetList> {
        self.get(bucket).and_then(|r| r.widgets.as_ref())
    }

    /// Whether `bucket` carries an explicit saved flag.
    #[must_use]
    pub fn is_saved(&self, bucket: Bucket) -> bool {
        self.get(bucket).is_some_and(|r| r.saved)
    }

    /// Overwrite a bucket's layout and mark it saved.
    pub fn set_layout(&mut self, bucket: Bucket, widgets: WidgetList) {
        let record = self.record_mut(bucket);
        record.widgets = Some(widgets);
        record.saved = true;
        self.dirty.insert(bucket);
    }

    /// Iterate `(bucket, widgets)` for every bucket with a persisted list.
    pub fn layouts(&self) -> impl Iterator<Item = (Bucket, &WidgetList)> {
        self.buckets
            .iter()
            .filter_map(|(b, r)| r.widgets.as_ref().map(|w| (*b, w)))
    }

    fn record_mut(&mut self, bucket: Bucket) -> &mut BucketRecord {
        self.buckets.entry(bucket).or_default()
    }
}

fn parse_map(key: &str, raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            tracing::warn!(key, "persisted blob is not an object, ignoring");
            None
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse persisted blob, ignoring");
            None
        }
    }
}

/// Whether a restored list may be used as-is.
#[must_use]
pub fn is_restorable(widgets: &[WidgetData]) -> bool {
    widgets.iter().all(WidgetData::has_valid_number)
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout Store
// ─────────────────────────────────────────────────────────────────────────────

/// Capability the dashboard controller persists through.
///
/// Every method fails soft: implementations log failures and fall back
/// instead of returning errors.
pub trait LayoutStore {
    /// Restored layout for `bucket`, or a fresh default widget set.
    fn load_layout(&self, bucket: Bucket) -> WidgetList;

    /// Overwrite `bucket`'s layout and mark it saved. Returns whether the
    /// write reached the backend.
    fn save_layout(&self, bucket: Bucket, widgets: &[WidgetData]) -> bool;

    /// Whether `bucket` was explicitly saved.
    fn is_saved(&self, bucket: Bucket) -> bool;

    /// Erase the whole storage namespace.
    fn clear_all(&self);

    /// Every bucket with a decodable persisted entry, unvalidated.
    fn saved_layouts(&self) -> BTreeMap<Bucket, WidgetList>;

    /// Overwrite several buckets (each marked saved) in one write.
    fn save_layouts(&self, layouts: &BTreeMap<Bucket, WidgetList>) -> bool;

    /// Save `widgets` to `active` and to every other bucket not yet
    /// explicitly saved, choosing those buckets from the same read the write
    /// is based on.
    ///
    /// Returns the other buckets written, or `None` when nothing reached
    /// the backend.
    fn sync_unsaved(&self, active: Bucket, widgets: &[WidgetData]) -> Option<Vec<Bucket>>;
}

/// [`LayoutStore`] over a [`StorageBackend`].
///
/// # Example
///
/// ```
/// use gridboard_core::{Bucket, WidgetData};
/// use gridboard_runtime::layout_store::{LayoutStore, PersistentLayoutStore};
///
/// let store = PersistentLayoutStore::in_memory();
/// assert_eq!(store.load_layout(Bucket::Two).len(), 10);
///
/// let layout = vec![WidgetData::numbered("a", "Widget", 3)];
/// store.save_layout(Bucket::Two, &layout);
/// assert_eq!(store.load_layout(Bucket::Two), layout);
/// assert!(store.is_saved(Bucket::Two));
/// ```
pub struct PersistentLayoutStore {
    backend: Box<dyn StorageBackend>,
}

impl PersistentLayoutStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store with memory storage (ephemeral, for testing).
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Store with file storage at the given path.
    #[cfg(feature = "state-persistence")]
    #[must_use]
    pub fn with_file(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(Box::new(FileStorage::new(path)))
    }

    /// Backend name for logging.
    #[must_use]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Check if the storage backend is available.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Decoded records, or empty records when the backend cannot be read.
    #[must_use]
    pub fn records(&self) -> LayoutRecords {
        match self.backend.load_all() {
            Ok(entries) => LayoutRecords::decode(&entries),
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), error = %e, "failed to read layouts");
                LayoutRecords::default()
            }
        }
    }

    /// Read-modify-write of the whole namespace.
    ///
    /// Returns what `f` produced, or `None` if the read or the write failed.
    fn modify<T>(&self, op: &str, f: impl FnOnce(&mut LayoutRecords) -> T) -> Option<T> {
        let mut entries = match self.backend.load_all() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), op, error = %e, "read failed, skipping write");
                return None;
            }
        };
        let mut records = LayoutRecords::decode(&entries);
        let output = f(&mut records);

        let result = records
            .encode_into(&mut entries)
            .and_then(|()| self.backend.save_all(&entries));
        match result {
            Ok(()) => {
                tracing::debug!(backend = %self.backend.name(), op, "layouts written");
                Some(output)
            }
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), op, error = %e, "failed to write layouts");
                None
            }
        }
    }
}

impl LayoutStore for PersistentLayoutStore {
    fn load_layout(&self, bucket: Bucket) -> WidgetList {
        let records = self.records();
        if let Some(widgets) = records.widgets(bucket) {
            if is_restorable(widgets) {
                tracing::debug!(
                    %bucket,
                    numbers = ?widgets.iter().map(WidgetData::number_or_zero).collect::<Vec<_>>(),
                    "restoring saved layout"
                );
                return widgets.clone();
            }
            tracing::info!(%bucket, "saved layout has invalid numbers, using defaults");
        }
        tracing::debug!(%bucket, "using default widgets");
        default_widgets()
    }

    fn save_layout(&self, bucket: Bucket, widgets: &[WidgetData]) -> bool {
        self.modify("save_layout", |records| {
            records.set_layout(bucket, widgets.to_vec());
        })
        .is_some()
    }

    fn is_saved(&self, bucket: Bucket) -> bool {
        self.records().is_saved(bucket)
    }

    fn clear_all(&self) {
        match self.backend.clear() {
            Ok(()) => tracing::info!(backend = %self.backend.name(), "cleared all persisted state"),
            Err(e) => {
                tracing::warn!(backend = %self.backend.name(), error = %e, "failed to clear storage");
            }
        }
    }

    fn saved_layouts(&self) -> BTreeMap<Bucket, WidgetList> {
        self.records()
            .layouts()
            .map(|(bucket, widgets)| (bucket, widgets.clone()))
            .collect()
    }

    fn save_layouts(&self, layouts: &BTreeMap<Bucket, WidgetList>) -> bool {
        if layouts.is_empty() {
            return true;
        }
        self.modify("save_layouts", |records| {
            for (bucket, widgets) in layouts {
                records.set_layout(*bucket, widgets.clone());
            }
        })
        .is_some()
    }

    fn sync_unsaved(&self, active: Bucket, widgets: &[WidgetData]) -> Option<Vec<Bucket>> {
        self.modify("sync_unsaved", |records| {
            let targets: Vec<Bucket> = active.others().filter(|b| !records.is_saved(*b)).collect();
            for bucket in &targets {
                records.set_layout(*bucket, widgets.to_vec());
            }
            records.set_layout(active, widgets.to_vec());
            targets
        })
    }
}

impl fmt::Debug for PersistentLayoutStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentLayoutStore")
            .field("backend", &self.backend.name())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────


#[cfg(all(test, feature = "state-persistence"))]
mod file_storage_tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        let storage = FileStorage::new(&path);

        let mut entries = HashMap::new();
        entries.insert(LAYOUTS_KEY.to_string(), "{}".to_string());
        storage.save_all(&entries).unwrap();
        assert!(path.exists());

        let loaded = storage.load_all().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn file_storage_load_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let storage = FileStorage::new(tmp.path().join("missing.json"));
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn file_storage_version_mismatch_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        std::fs::write(&path, r#"{"format_version":99,"entries":{"a":"b"}}"#).unwrap();
        assert!(FileStorage::new(&path).load_all().unwrap().is_empty());
    }

    #[test]
    fn file_storage_corrupt_file_is_error_but_store_degrades() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("storage.json");
        std::fs::write(&path, "garbage").unwrap();
        assert!(FileStorage::new(&path).load_all().is_err());

        let store = PersistentLayoutStore::with_file(&path);
        assert_eq!(store.load_layout(Bucket::Two), default_widgets());
    }

    #[test]
    fn file_storage_clear_and_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dirs").join("storage.json");
        let store = PersistentLayoutStore::with_file(&path);
        store.save_layout(Bucket::One, &[WidgetData::numbered("a", "Widget", 1)]);
        assert!(path.exists());
        store.clear_all();
        assert!(!path.exists());
    }
}
