#![forbid(unsafe_code)]

//! Dashboard controller: the layout synchronization core.
//!
//! The controller owns the active widget list and bucket, mediates every
//! mutation through a [`LayoutStore`], and applies the cross-bucket
//! policies.
//!
//! # Policies
//!
//! | Operation | Other buckets affected |
//! |-----------|------------------------|
//! | add / remove widget | buckets that already have a persisted entry (fan-out) |
//! | save with override-defaults on | buckets never explicitly saved |
//! | reorder, reset layout | none |
//! | bucket switch | none (the bucket being left is flushed) |
//!
//! Fan-out follows buckets with a persisted entry. Override-defaults only
//! fills buckets whose saved flag is unset.
//!
//! # Invariants
//!
//! 1. Leaving a bucket always flushes the active list to it first.
//! 2. Every mutation of the active list is written through immediately.
//! 3. Widget ids in the active list stay unique.
//! 4. New widget numbers are `max + 1` over the active list only; numbers
//!    may repeat across buckets.

use std::collections::BTreeMap;
use std::fmt;

use gridboard_core::{
    Bucket, IdGenerator, TimestampIds, WidgetData, WidgetId, WidgetKind, WidgetList,
    default_widgets,
};
use gridboard_layout::{Breakpoints, ViewportClassifier};

use crate::layout_store::LayoutStore;
use crate::status::StatusTone;

/// Title given to widgets created by [`DashboardController::add_widget`].
pub const NEW_WIDGET_TITLE: &str = "Widget";

/// Which operation produced a [`SyncReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    /// A widget was added and fanned out.
    Added,
    /// A widget was removed and fanned out.
    Removed,
    /// Plain save, override-defaults off.
    Saved,
    /// Save with override-defaults on.
    OverrideSynced,
}

/// How many buckets other than the active one an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Producing operation.
    pub kind: SyncKind,
    /// Number of other buckets written.
    pub touched: usize,
}

impl SyncReport {
    const fn new(kind: SyncKind, touched: usize) -> Self {
        Self { kind, touched }
    }

    /// User-facing status text, or `None` when the outcome is silent.
    ///
    /// Fan-out that touched nothing is silent; a save always reports, and
    /// an override save with nothing to sync says so explicitly.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let n = self.touched;
        let layouts = if n == 1 { "layout" } else { "layouts" };
        match self.kind {
            SyncKind::Added if n > 0 => Some(format!("Widget added to {n} other {layouts}")),
            SyncKind::Removed if n > 0 => {
                Some(format!("Widget removed from {n} other {layouts}"))
            }
            SyncKind::Added | SyncKind::Removed => None,
            SyncKind::Saved => Some("Layout saved".to_owned()),
            SyncKind::OverrideSynced if n == 0 => {
                Some("Layout saved (no defaults to sync)".to_owned())
            }
            SyncKind::OverrideSynced => {
                Some(format!("Layout saved and synced to {n} default {layouts}"))
            }
        }
    }

    /// Tone for the status message.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        match (self.kind, self.touched) {
            (SyncKind::OverrideSynced, 0) => StatusTone::Info,
            _ => StatusTone::Success,
        }
    }
}

/// Header lines describing the active layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInfo {
    /// `"3 Columns (Manual)"` or `"1 Column (Auto)"`.
    pub columns: String,
    /// `"10 Widgets"` or `"1 Widget"`.
    pub widgets: String,
}

/// Snapshot of controller and persisted state for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugReport {
    /// Active bucket.
    pub bucket: Bucket,
    /// Manual pin, if any.
    pub manual_override: Option<Bucket>,
    /// Override-defaults flag.
    pub override_defaults: bool,
    /// Numbers of the active list, in order.
    pub numbers: Vec<i64>,
    /// Buckets with a persisted entry and their lengths.
    pub persisted: BTreeMap<Bucket, usize>,
    /// Buckets explicitly saved.
    pub saved: Vec<Bucket>,
}

/// Orchestrates the active layout and its persistence.
///
/// # Example
///
/// ```
/// use gridboard_core::Bucket;
/// use gridboard_runtime::controller::DashboardController;
/// use gridboard_runtime::layout_store::PersistentLayoutStore;
///
/// let mut dash = DashboardController::new(PersistentLayoutStore::in_memory(), 900);
/// assert_eq!(dash.active_bucket(), Bucket::Three);
/// assert_eq!(dash.widgets().len(), 10);
///
/// let (widget, _report) = dash.add_widget();
/// assert_eq!(widget.number, Some(11));
/// ```
pub struct DashboardController<S, G = TimestampIds> {
    store: S,
    ids: G,
    classifier: ViewportClassifier,
    viewport_width: u32,
    active_bucket: Bucket,
    active_list: WidgetList,
    override_defaults: bool,
}

impl<S: LayoutStore> DashboardController<S, TimestampIds> {
    /// Controller with default breakpoints and timestamp ids.
    #[must_use]
    pub fn new(store: S, viewport_width: u32) -> Self {
        Self::with_parts(store, TimestampIds::new(), Breakpoints::DEFAULT, viewport_width)
    }
}

impl<S: LayoutStore, G: IdGenerator> DashboardController<S, G> {
    /// Controller with explicit id source and breakpoints.
    ///
    /// Classifies `viewport_width` and restores that bucket's layout.
    #[must_use]
    pub fn with_parts(store: S, ids: G, breakpoints: Breakpoints, viewport_width: u32) -> Self {
        let classifier = ViewportClassifier::new(breakpoints);
        let active_bucket = classifier.classify(viewport_width);
        let active_list = store.load_layout(active_bucket);
        tracing::info!(
            bucket = %active_bucket,
            width = viewport_width,
            widgets = active_list.len(),
            "dashboard initialized"
        );
        Self {
            store,
            ids,
            classifier,
            viewport_width,
            active_bucket,
            active_list,
            override_defaults: false,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    /// The active, ordered widget list.
    #[must_use]
    pub fn widgets(&self) -> &[WidgetData] {
        &self.active_list
    }

    /// The active bucket.
    #[must_use]
    pub fn active_bucket(&self) -> Bucket {
        self.active_bucket
    }

    /// Manual bucket pin, if set.
    #[must_use]
    pub fn manual_override(&self) -> Option<Bucket> {
        self.classifier.manual_override()
    }

    /// Whether saves push onto never-saved buckets.
    #[must_use]
    pub fn override_defaults(&self) -> bool {
        self.override_defaults
    }

    /// Last reported viewport width.
    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Widget by id in the active list.
    #[must_use]
    pub fn widget(&self, id: &WidgetId) -> Option<&WidgetData> {
        self.active_list.iter().find(|w| &w.id == id)
    }

    // ── Bucket switching ───────────────────────────────────────────────────

    fn flush(&self) {
        self.store.save_layout(self.active_bucket, &self.active_list);
    }

    fn enter(&mut self, bucket: Bucket) {
        self.active_list = self.store.load_layout(bucket);
        if bucket != self.active_bucket {
            tracing::info!(from = %self.active_bucket, to = %bucket, "switched bucket");
        }
        self.active_bucket = bucket;
    }

    /// Viewport width changed. Returns `true` if the bucket switched.
    pub fn on_resize(&mut self, width: u32) -> bool {
        self.viewport_width = width;
        let bucket = self.classifier.classify(width);
        if bucket == self.active_bucket {
            return false;
        }
        self.flush();
        self.enter(bucket);
        true
    }

    /// Pin the bucket regardless of width.
    pub fn set_manual_columns(&mut self, bucket: Bucket) {
        self.flush();
        self.classifier.set_manual_override(Some(bucket));
        self.enter(bucket);
    }

    /// Unpin and return to width-driven classification.
    pub fn reset_to_auto_columns(&mut self) {
        self.flush();
        self.classifier.set_manual_override(None);
        let bucket = self.classifier.classify(self.viewport_width);
        self.enter(bucket);
    }

    // ── Ordering ───────────────────────────────────────────────────────────

    /// Move the widget at `from` to `to` and persist.
    ///
    /// A single-element move, not a swap: everything between the two
    /// indices shifts by one. Returns `true` if the list changed.
    pub fn on_drag_end(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let len = self.active_list.len();
        if from >= len || to >= len {
            tracing::warn!(from, to, len, "drag indices out of range, ignoring");
            return false;
        }
        let moved = self.active_list.remove(from);
        self.active_list.insert(to, moved);
        self.flush();
        tracing::debug!(from, to, bucket = %self.active_bucket, "reordered");
        true
    }

    // ── Membership ─────────────────────────────────────────────────────────

    /// Number the next widget will get: `max(numbers, 0) + 1`.
    #[must_use]
    pub fn next_number(&self) -> i64 {
        self.active_list
            .iter()
            .map(WidgetData::number_or_zero)
            .max()
            .unwrap_or(0)
            .max(0)
            + 1
    }

    fn fresh_id(&mut self) -> WidgetId {
        loop {
            let id = self.ids.next_id();
            if self.widget(&id).is_none() {
                return id;
            }
            tracing::debug!(id = %id, "id generator collided with active list, retrying");
        }
    }

    /// Write fanned-out lists. Returns how many buckets reached storage.
    fn fan_out(&self, lists: &BTreeMap<Bucket, WidgetList>) -> usize {
        if lists.is_empty() {
            return 0;
        }
        if self.store.save_layouts(lists) {
            lists.len()
        } else {
            tracing::warn!(
                buckets = ?lists.keys().collect::<Vec<_>>(),
                "fan-out not persisted"
            );
            0
        }
    }

    /// Append a new numbered widget, persist, and fan it out to every other
    /// bucket that already has a persisted entry.
    pub fn add_widget(&mut self) -> (WidgetData, SyncReport) {
        let widget = WidgetData {
            id: self.fresh_id(),
            kind: WidgetKind::Number,
            title: NEW_WIDGET_TITLE.to_owned(),
            number: Some(self.next_number()),
        };
        self.active_list.push(widget.clone());
        self.flush();

        let mut targets = self.store.saved_layouts();
        targets.remove(&self.active_bucket);
        for list in targets.values_mut() {
            list.push(widget.clone());
        }
        let touched = self.fan_out(&targets);

        tracing::info!(
            id = %widget.id,
            number = widget.number_or_zero(),
            touched,
            "widget added"
        );
        (widget, SyncReport::new(SyncKind::Added, touched))
    }

    /// Remove `id` from the active list, persist, and remove it from every
    /// other persisted bucket that contains it.
    pub fn remove_widget(&mut self, id: &WidgetId) -> SyncReport {
        self.active_list.retain(|w| &w.id != id);
        self.flush();

        let mut changed = BTreeMap::new();
        for (bucket, mut list) in self.store.saved_layouts() {
            if bucket == self.active_bucket {
                continue;
            }
            let before = list.len();
            list.retain(|w| &w.id != id);
            if list.len() < before {
                changed.insert(bucket, list);
            }
        }
        let touched = self.fan_out(&changed);

        tracing::info!(id = %id, touched, "widget removed");
        SyncReport::new(SyncKind::Removed, touched)
    }

    // ── Saving ─────────────────────────────────────────────────────────────

    /// Toggle the override-defaults policy.
    pub fn set_override_defaults(&mut self, enabled: bool) {
        self.override_defaults = enabled;
    }

    /// Flip the override-defaults policy, returning the new value.
    pub fn toggle_override_defaults(&mut self) -> bool {
        self.override_defaults = !self.override_defaults;
        self.override_defaults
    }

    /// Save the active layout, honouring override-defaults.
    ///
    /// With the flag on, the active list is also written to every other
    /// bucket that has never been explicitly saved. Customized buckets are
    /// never touched.
    pub fn save_layout_with_override(&mut self) -> SyncReport {
        if !self.override_defaults {
            self.flush();
            return SyncReport::new(SyncKind::Saved, 0);
        }

        let synced = match self.store.sync_unsaved(self.active_bucket, &self.active_list) {
            Some(buckets) => buckets.len(),
            None => {
                tracing::warn!(bucket = %self.active_bucket, "override save not persisted");
                0
            }
        };

        tracing::info!(bucket = %self.active_bucket, synced, "layout saved with override");
        SyncReport::new(SyncKind::OverrideSynced, synced)
    }

    /// Replace the active list with the defaults and persist it for the
    /// active bucket only.
    pub fn reset_layout(&mut self) {
        self.active_list = default_widgets();
        self.flush();
        tracing::info!(bucket = %self.active_bucket, "layout reset to defaults");
    }

    /// Erase all persisted state and return to a pristine dashboard.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.active_list = default_widgets();
        self.classifier.set_manual_override(None);
        self.override_defaults = false;
        self.active_bucket = self.classifier.classify(self.viewport_width);
        tracing::info!(bucket = %self.active_bucket, "complete reset");
    }

    // ── Presentation helpers ───────────────────────────────────────────────

    /// `"3 Columns (Manual)"`-style header line.
    #[must_use]
    pub fn columns_label(&self) -> String {
        let n = self.active_bucket.columns();
        let plural = if n > 1 { "s" } else { "" };
        let mode = if self.manual_override().is_some() {
            "Manual"
        } else {
            "Auto"
        };
        format!("{n} Column{plural} ({mode})")
    }

    /// `"10 Widgets"`-style count line.
    #[must_use]
    pub fn widgets_label(&self) -> String {
        let n = self.active_list.len();
        let plural = if n == 1 { "" } else { "s" };
        format!("{n} Widget{plural}")
    }

    /// Both header lines.
    #[must_use]
    pub fn layout_info(&self) -> LayoutInfo {
        LayoutInfo {
            columns: self.columns_label(),
            widgets: self.widgets_label(),
        }
    }

    /// Collect and log a diagnostic snapshot.
    pub fn debug_report(&self) -> DebugReport {
        let persisted = self
            .store
            .saved_layouts()
            .into_iter()
            .map(|(bucket, list)| (bucket, list.len()))
            .collect();
        let saved = Bucket::ALL
            .into_iter()
            .filter(|b| self.store.is_saved(*b))
            .collect();
        let report = DebugReport {
            bucket: self.active_bucket,
            manual_override: self.manual_override(),
            override_defaults: self.override_defaults,
            numbers: self
                .active_list
                .iter()
                .map(WidgetData::number_or_zero)
                .collect(),
            persisted,
            saved,
        };
        tracing::info!(report = ?report, "dashboard debug report");
        report
    }
}

impl<S, G> fmt::Debug for DashboardController<S, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("bucket", &self.active_bucket)
            .field("manual", &self.classifier.manual_override())
            .field("widgets", &self.active_list.len())
            .field("override_defaults", &self.override_defaults)
            .finish()
    }
}
