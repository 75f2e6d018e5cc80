#![forbid(unsafe_code)]

//! Widget records and the default widget set.
//!
//! A [`WidgetData`] is the unit stored in every bucket's layout. Its
//! serialized shape is part of the persisted format:
//!
//! ```json
//! { "id": "1712345678901", "type": "number", "title": "Widget", "number": 11 }
//! ```
//!
//! # Invariants
//!
//! 1. Ids are unique within one bucket's list and never reused.
//! 2. `number` is the rendering dispatch key. It may repeat across buckets
//!    or after clears; it is never renumbered.
//! 3. A widget whose `number` is absent or `<= 0` invalidates the whole
//!    list it belongs to when that list is restored.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Stable, unique widget identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Widget type tag.
///
/// Only [`WidgetKind::Number`] is produced by the dashboard; the other tags
/// are accepted when reading persisted layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Chart,
    Stats,
    Weather,
    Todo,
    Clock,
    #[default]
    Number,
}

/// One widget in a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetData {
    /// Unique id within a layout.
    pub id: WidgetId,
    /// Type tag (serialized as `type`).
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Display title.
    pub title: String,
    /// Rendering dispatch key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
}

/// Ordered widget list for one bucket.
pub type WidgetList = Vec<WidgetData>;

impl WidgetData {
    /// Create a `number`-typed widget.
    #[must_use]
    pub fn numbered(id: impl Into<WidgetId>, title: impl Into<String>, number: i64) -> Self {
        Self {
            id: id.into(),
            kind: WidgetKind::Number,
            title: title.into(),
            number: Some(number),
        }
    }

    /// Whether `number` is present and strictly positive.
    #[inline]
    #[must_use]
    pub fn has_valid_number(&self) -> bool {
        self.number.is_some_and(|n| n > 0)
    }

    /// Dispatch number, with absent mapped to `0`.
    #[inline]
    #[must_use]
    pub fn number_or_zero(&self) -> i64 {
        self.number.unwrap_or(0)
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

const DEFAULT_TITLES: [&str; 10] = [
    "Weather",
    "Invoices Owed to You",
    "Task List",
    "Total Cash In and Out",
    "Bills You Need to Pay",
    "Business Savings Account",
    "Current Account",
    "Expense Claims",
    "Widget",
    "Widget",
];

/// The ten-widget seed layout, numbered 1–10.
///
/// Returns freshly allocated values on every call; callers may mutate the
/// result without affecting later calls.
#[must_use]
pub fn default_widgets() -> WidgetList {
    DEFAULT_TITLES
        .iter()
        .zip(1_i64..)
        .map(|(title, n)| WidgetData::numbered(n.to_string(), *title, n))
        .collect()
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Source of fresh widget ids.
pub trait IdGenerator {
    /// Produce an id that this generator has never returned before.
    fn next_id(&mut self) -> WidgetId;
}

/// Millisecond-timestamp ids, bumped forward when the clock has not moved.
#[derive(Debug, Default, Clone)]
pub struct TimestampIds {
    last: u128,
}

impl TimestampIds {
    /// Create a generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> WidgetId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.last = now.max(self.last + 1);
        WidgetId(self.last.to_string())
    }
}

/// Deterministic ids `"{prefix}{n}"` for tests and replays.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Start counting from `start` with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: start,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("w", 1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_numbered_one_to_ten() {
        let defaults = default_widgets();
        assert_eq!(defaults.len(), 10);
        for (i, w) in defaults.iter().enumerate() {
            assert_eq!(w.number, Some(i as i64 + 1));
            assert_eq!(w.id.as_str(), (i + 1).to_string());
            assert_eq!(w.kind, WidgetKind::Number);
        }
        assert_eq!(defaults[0].title, "Weather");
        assert_eq!(defaults[7].title, "Expense Claims");
        assert_eq!(defaults[9].title, "Widget");
    }

    #[test]
    fn default_set_is_fresh_each_call() {
        let mut a = default_widgets();
        a[0].title.push_str(" (edited)");
        assert_eq!(default_widgets()[0].title, "Weather");
    }

    #[test]
    fn valid_number_rules() {
        let mut w = WidgetData::numbered("a", "A", 3);
        assert!(w.has_valid_number());
        w.number = Some(0);
        assert!(!w.has_valid_number());
        w.number = Some(-4);
        assert!(!w.has_valid_number());
        w.number = None;
        assert!(!w.has_valid_number());
        assert_eq!(w.number_or_zero(), 0);
    }

    #[test]
    fn serialized_shape() {
        let w = WidgetData::numbered("42", "Widget", 11);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(
            json,
            r#"{"id":"42","type":"number","title":"Widget","number":11}"#
        );

        let bare: WidgetData =
            serde_json::from_str(r#"{"id":"x","type":"clock","title":"Clock"}"#).unwrap();
        assert_eq!(bare.kind, WidgetKind::Clock);
        assert_eq!(bare.number, None);
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("number"));
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let res: Result<WidgetData, _> =
            serde_json::from_str(r#"{"id":"x","type":"gauge","title":"G"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn timestamp_ids_are_strictly_increasing() {
        let mut ids = TimestampIds::new();
        let a: u128 = ids.next_id().as_str().parse().unwrap();
        let b: u128 = ids.next_id().as_str().parse().unwrap();
        let c: u128 = ids.next_id().as_str().parse().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn sequential_ids() {
        let mut ids = SequentialIds::new("n", 7);
        assert_eq!(ids.next_id().as_str(), "n7");
        assert_eq!(ids.next_id().as_str(), "n8");
    }
}
