#![forbid(unsafe_code)]

//! Step-based dashboard session.
//!
//! [`DashboardHost`] drives a [`DashboardController`] from [`HostEvent`]s
//! without threads or blocking. The host controls the loop:
//!
//! 1. Push events via [`DashboardHost::push_event`].
//! 2. Advance time via [`DashboardHost::advance_time`].
//! 3. Call [`DashboardHost::step`] to process queued events and timers.
//! 4. Read the frame via [`DashboardHost::snapshot`].
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use gridboard_core::HostEvent;
//! use gridboard_runtime::{DashboardController, PersistentLayoutStore};
//! use gridboard_web::DashboardHost;
//!
//! let controller = DashboardController::new(PersistentLayoutStore::in_memory(), 1280);
//! let mut host = DashboardHost::new(controller, Duration::from_secs(3));
//!
//! host.push_event(HostEvent::AddWidget);
//! host.step();
//! assert_eq!(host.snapshot().widgets_label, "11 Widgets");
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use gridboard_core::{HostEvent, IdGenerator, TimestampIds};
use gridboard_layout::GridPlacement;
use gridboard_runtime::{
    DashboardConfig, DashboardController, LayoutStore, PersistentLayoutStore, StatusLine,
    StatusTone, SyncReport,
};
use gridboard_widgets::{LiveWidgets, SeededRng};

use crate::DeterministicClock;
use crate::snapshot::{DashboardSnapshot, StatusSnapshot, Tile};

/// How often weather widgets draw new readings.
pub const WEATHER_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Result of a single [`DashboardHost::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Number of events processed during this step.
    pub events_processed: u32,
    /// Whether the active bucket or widget list may have changed.
    pub layout_changed: bool,
    /// Whether weather widgets drew new readings. Several elapsed intervals
    /// still produce a single refresh.
    pub weather_refreshed: bool,
    /// Whether a status message expired.
    pub status_expired: bool,
}

/// Host-driven dashboard session.
pub struct DashboardHost<S, G = TimestampIds> {
    controller: DashboardController<S, G>,
    live: LiveWidgets,
    status: StatusLine,
    clock: DeterministicClock,
    queue: VecDeque<HostEvent>,
    last_weather: Duration,
}

impl DashboardHost<PersistentLayoutStore, TimestampIds> {
    /// Session over the store and breakpoints `config` describes.
    #[must_use]
    pub fn from_config(config: &DashboardConfig, viewport_width: u32) -> Self {
        let controller = DashboardController::with_parts(
            config.open_store(),
            TimestampIds::new(),
            config.breakpoints,
            viewport_width,
        );
        Self::new(controller, config.status_duration)
    }
}

impl<S: LayoutStore, G: IdGenerator> DashboardHost<S, G> {
    /// Wrap a controller. Status messages stay up for `status_duration`.
    #[must_use]
    pub fn new(controller: DashboardController<S, G>, status_duration: Duration) -> Self {
        Self::with_rng(controller, status_duration, SeededRng::default())
    }

    /// Like [`new`](Self::new) with an explicit random source for weather.
    #[must_use]
    pub fn with_rng(
        controller: DashboardController<S, G>,
        status_duration: Duration,
        rng: SeededRng,
    ) -> Self {
        let mut live = LiveWidgets::new(rng);
        live.sync(controller.widgets());
        Self {
            controller,
            live,
            status: StatusLine::new(status_duration),
            clock: DeterministicClock::new(),
            queue: VecDeque::new(),
            last_weather: Duration::ZERO,
        }
    }

    /// Queue an event for the next [`step`](Self::step).
    pub fn push_event(&mut self, event: HostEvent) {
        self.queue.push_back(event);
    }

    /// Advance the deterministic clock by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Jump the deterministic clock to `now` (e.g. a host timestamp).
    ///
    /// Moving backwards is allowed; timers then wait until time catches up
    /// with their last firing.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Current monotonic time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Process queued events, then timers.
    pub fn step(&mut self) -> StepResult {
        let mut result = StepResult::default();
        while let Some(event) = self.queue.pop_front() {
            result.events_processed += 1;
            result.layout_changed |= self.handle_event(event);
        }

        let now = self.clock.now();
        let elapsed = now.saturating_sub(self.last_weather);
        if elapsed >= WEATHER_REFRESH_INTERVAL {
            // Snap to the newest whole interval.
            let phase = elapsed.as_nanos() % WEATHER_REFRESH_INTERVAL.as_nanos();
            self.last_weather = now.saturating_sub(Duration::from_nanos(
                u64::try_from(phase).unwrap_or_default(),
            ));
            self.live.refresh_weather();
            result.weather_refreshed = true;
        }

        result.status_expired = self.status.tick(now);
        result
    }

    /// The wrapped controller.
    #[must_use]
    pub fn controller(&self) -> &DashboardController<S, G> {
        &self.controller
    }

    /// Live widget state.
    #[must_use]
    pub fn live(&self) -> &LiveWidgets {
        &self.live
    }

    /// Current frame.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let widgets = self.controller.widgets();
        let placement = GridPlacement::new(self.controller.active_bucket(), widgets.len());
        let tiles = widgets
            .iter()
            .zip(placement.cells())
            .map(|(widget, cell)| {
                let view = self.live.view(widget);
                Tile {
                    id: widget.id.clone(),
                    number: widget.number_or_zero(),
                    title: widget.title.clone(),
                    view: view.name(),
                    cell,
                    lines: view.lines(),
                }
            })
            .collect();
        let info = self.controller.layout_info();
        DashboardSnapshot {
            bucket: self.controller.active_bucket(),
            manual_override: self.controller.manual_override(),
            override_defaults: self.controller.override_defaults(),
            columns_label: info.columns,
            widgets_label: info.widgets,
            tiles,
            status: self
                .status
                .visible(self.clock.now())
                .map(|m| StatusSnapshot {
                    text: m.text.clone(),
                    tone: m.tone,
                }),
        }
    }

    // --- Private helpers ---

    /// Returns whether the layout may have changed.
    fn handle_event(&mut self, event: HostEvent) -> bool {
        let touches_layout = event.touches_layout();
        let changed = match event {
            HostEvent::Resize { width } => self.controller.on_resize(width),
            HostEvent::Drag(drag) => match drag.as_move() {
                Some((from, to)) => self.controller.on_drag_end(from, to),
                None => {
                    tracing::debug!(?drag, "ignoring drag without a move");
                    false
                }
            },
            HostEvent::AddWidget => {
                let (_, report) = self.controller.add_widget();
                self.report(report);
                true
            }
            HostEvent::RemoveWidget(id) => {
                let report = self.controller.remove_widget(&id);
                self.report(report);
                true
            }
            HostEvent::ResetLayout => {
                self.controller.reset_layout();
                self.notify("Layout reset to defaults", StatusTone::Info);
                true
            }
            HostEvent::ClearAll => {
                self.controller.clear_all();
                self.live.clear();
                self.notify("All layouts cleared", StatusTone::Info);
                true
            }
            HostEvent::SetColumns(bucket) => {
                self.controller.set_manual_columns(bucket);
                true
            }
            HostEvent::AutoColumns => {
                self.controller.reset_to_auto_columns();
                true
            }
            HostEvent::SaveLayout => {
                let report = self.controller.save_layout_with_override();
                self.report(report);
                false
            }
            HostEvent::SetOverrideDefaults(enabled) => {
                self.controller.set_override_defaults(enabled);
                false
            }
            HostEvent::Debug => {
                let _ = self.controller.debug_report();
                false
            }
            HostEvent::TodoToggle { widget, todo } => {
                let found = self.live.todos_mut(&widget).is_some_and(|l| l.toggle(todo));
                if !found {
                    tracing::debug!(%widget, todo, "toggle for unknown task");
                }
                false
            }
            HostEvent::TodoAdd { widget, text } => {
                match self.live.todos_mut(&widget) {
                    Some(list) => {
                        if list.add(&text).is_none() {
                            tracing::debug!(%widget, "ignoring blank task");
                        }
                    }
                    None => tracing::debug!(%widget, "task added to unknown list"),
                }
                false
            }
            HostEvent::TodoDelete { widget, todo } => {
                let found = self.live.todos_mut(&widget).is_some_and(|l| l.delete(todo));
                if !found {
                    tracing::debug!(%widget, todo, "delete for unknown task");
                }
                false
            }
        };
        if touches_layout {
            self.live.sync(self.controller.widgets());
        }
        changed
    }

    fn report(&mut self, report: SyncReport) {
        if let Some(text) = report.message() {
            self.notify(text, report.tone());
        }
    }

    fn notify(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status.show(text, tone, self.clock.now());
    }
}

impl<S, G> std::fmt::Debug for DashboardHost<S, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardHost")
            .field("controller", &self.controller)
            .field("now", &self.clock.now())
            .field("queued", &self.queue.len())
            .finish()
    }
}
