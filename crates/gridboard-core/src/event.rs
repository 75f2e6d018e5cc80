#![forbid(unsafe_code)]

//! Events pushed into the dashboard by its host.
//!
//! The host (a browser shim, a test, a replay) owns the real input devices
//! and forwards what happened as [`HostEvent`] values. All events derive
//! `Clone`, `PartialEq`, and `Eq` for use in tests and recorded sessions.

use crate::bucket::Bucket;
use crate::widget::WidgetId;

/// Completion report from the external drag-reorder gesture.
///
/// Either index may be missing when the gesture was dropped outside the
/// grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragEnd {
    /// Index the item was picked up from.
    pub old_index: Option<usize>,
    /// Index the item was dropped at.
    pub new_index: Option<usize>,
}

impl DragEnd {
    /// A completed gesture with both indices known.
    #[must_use]
    pub const fn new(old_index: usize, new_index: usize) -> Self {
        Self {
            old_index: Some(old_index),
            new_index: Some(new_index),
        }
    }

    /// `(from, to)` when both indices are present and differ.
    #[must_use]
    pub fn as_move(&self) -> Option<(usize, usize)> {
        match (self.old_index, self.new_index) {
            (Some(from), Some(to)) if from != to => Some((from, to)),
            _ => None,
        }
    }
}

/// Canonical host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Viewport width changed (CSS pixels).
    Resize {
        /// New viewport width.
        width: u32,
    },
    /// A drag gesture finished.
    Drag(DragEnd),
    /// "+ Add Widget".
    AddWidget,
    /// The close button on a widget.
    RemoveWidget(WidgetId),
    /// "Reset Layout".
    ResetLayout,
    /// "Clear All".
    ClearAll,
    /// One of the manual column buttons.
    SetColumns(Bucket),
    /// "Auto".
    AutoColumns,
    /// "Save Layout" (honours the override-defaults flag).
    SaveLayout,
    /// The override-defaults checkbox.
    SetOverrideDefaults(bool),
    /// "Debug": dump controller state to the log.
    Debug,
    /// Toggle a task in a todo widget.
    TodoToggle {
        /// Owning widget.
        widget: WidgetId,
        /// Task id within the widget.
        todo: u64,
    },
    /// Submit a new task to a todo widget.
    TodoAdd {
        /// Owning widget.
        widget: WidgetId,
        /// Task text as typed.
        text: String,
    },
    /// Delete a task from a todo widget.
    TodoDelete {
        /// Owning widget.
        widget: WidgetId,
        /// Task id within the widget.
        todo: u64,
    },
}

impl HostEvent {
    /// Whether this event can change persisted layout state.
    #[must_use]
    pub fn touches_layout(&self) -> bool {
        !matches!(
            self,
            HostEvent::Debug
                | HostEvent::SetOverrideDefaults(_)
                | HostEvent::TodoToggle { .. }
                | HostEvent::TodoAdd { .. }
                | HostEvent::TodoDelete { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_filters_incomplete_and_equal() {
        assert_eq!(DragEnd::new(0, 2).as_move(), Some((0, 2)));
        assert_eq!(DragEnd::new(3, 3).as_move(), None);
        assert_eq!(DragEnd::default().as_move(), None);
        let half = DragEnd {
            old_index: Some(1),
            new_index: None,
        };
        assert_eq!(half.as_move(), None);
    }

    #[test]
    fn layout_touching_events() {
        assert!(HostEvent::AddWidget.touches_layout());
        assert!(HostEvent::Resize { width: 800 }.touches_layout());
        assert!(!HostEvent::Debug.touches_layout());
        assert!(!HostEvent::SetOverrideDefaults(true).touches_layout());
    }
}
