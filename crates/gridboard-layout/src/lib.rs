#![forbid(unsafe_code)]

//! Viewport classification and grid placement.
//!
//! - [`Breakpoints`] - width thresholds that split the viewport into buckets
//! - [`ViewportClassifier`] - breakpoints plus an optional manual pin
//! - [`classify`] - the default classifier as a free function
//! - [`grid`] - row-major placement of widgets into a bucket's columns

pub mod grid;

pub use gridboard_core::Bucket;
pub use grid::{GridCell, GridPlacement};

/// Width thresholds for the four column buckets.
///
/// Each field is the largest viewport width (inclusive, in CSS pixels)
/// that still maps to that bucket. Anything wider than `three` is
/// [`Bucket::Four`].
///
/// | Bucket | Default width range |
/// |--------|---------------------|
/// | 1      | 0–480               |
/// | 2      | 481–768             |
/// | 3      | 769–1024            |
/// | 4      | 1025+               |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Maximum width for one column.
    pub one: u32,
    /// Maximum width for two columns.
    pub two: u32,
    /// Maximum width for three columns.
    pub three: u32,
}

impl Breakpoints {
    /// Default breakpoints: 480 / 768 / 1024 pixels.
    pub const DEFAULT: Self = Self {
        one: 480,
        two: 768,
        three: 1024,
    };

    /// Create breakpoints with explicit thresholds.
    ///
    /// Values are sanitized to be monotonically non-decreasing.
    pub const fn new(one: u32, two: u32, three: u32) -> Self {
        let two = if two < one { one } else { two };
        let three = if three < two { two } else { three };
        Self { one, two, three }
    }

    /// Classify a width into a bucket.
    ///
    /// Thresholds are checked in ascending order; the first that contains
    /// `width` wins.
    #[inline]
    pub const fn classify_width(self, width: u32) -> Bucket {
        if width <= self.one {
            Bucket::One
        } else if width <= self.two {
            Bucket::Two
        } else if width <= self.three {
            Bucket::Three
        } else {
            Bucket::Four
        }
    }

    /// Largest width that maps to `bucket`, or `None` for the open-ended
    /// top bucket.
    #[must_use]
    pub const fn threshold(self, bucket: Bucket) -> Option<u32> {
        match bucket {
            Bucket::One => Some(self.one),
            Bucket::Two => Some(self.two),
            Bucket::Three => Some(self.three),
            Bucket::Four => None,
        }
    }

    /// All thresholds as `(bucket, max_width)` pairs.
    #[must_use]
    pub const fn thresholds(self) -> [(Bucket, Option<u32>); 4] {
        [
            (Bucket::One, Some(self.one)),
            (Bucket::Two, Some(self.two)),
            (Bucket::Three, Some(self.three)),
            (Bucket::Four, None),
        ]
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classify with the default breakpoints.
///
/// A manual override pins the bucket regardless of width.
#[inline]
#[must_use]
pub const fn classify(width: u32, manual_override: Option<Bucket>) -> Bucket {
    match manual_override {
        Some(bucket) => bucket,
        None => Breakpoints::DEFAULT.classify_width(width),
    }
}

/// Breakpoints paired with an optional manual bucket pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportClassifier {
    breakpoints: Breakpoints,
    manual: Option<Bucket>,
}

impl ViewportClassifier {
    /// Classifier with the given breakpoints and no pin.
    #[must_use]
    pub const fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            manual: None,
        }
    }

    /// The active breakpoints.
    #[must_use]
    pub const fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Current manual pin, if any.
    #[must_use]
    pub const fn manual_override(&self) -> Option<Bucket> {
        self.manual
    }

    /// Pin (or unpin with `None`) the bucket.
    pub fn set_manual_override(&mut self, bucket: Option<Bucket>) {
        self.manual = bucket;
    }

    /// Bucket for `width`, honouring the pin.
    #[must_use]
    pub const fn classify(&self, width: u32) -> Bucket {
        match self.manual {
            Some(bucket) => bucket,
            None => self.breakpoints.classify_width(width),
        }
    }

    /// Bucket for `width` ignoring the pin.
    #[must_use]
    pub const fn classify_auto(&self, width: u32) -> Bucket {
        self.breakpoints.classify_width(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boundaries() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify_width(0), Bucket::One);
        assert_eq!(bp.classify_width(480), Bucket::One);
        assert_eq!(bp.classify_width(481), Bucket::Two);
        assert_eq!(bp.classify_width(768), Bucket::Two);
        assert_eq!(bp.classify_width(769), Bucket::Three);
        assert_eq!(bp.classify_width(1024), Bucket::Three);
        assert_eq!(bp.classify_width(1025), Bucket::Four);
        assert_eq!(bp.classify_width(u32::MAX), Bucket::Four);
    }

    #[test]
    fn manual_override_wins() {
        assert_eq!(classify(2000, Some(Bucket::One)), Bucket::One);
        assert_eq!(classify(100, Some(Bucket::Four)), Bucket::Four);
        assert_eq!(classify(100, None), Bucket::One);
    }

    #[test]
    fn new_sanitizes_order() {
        let bp = Breakpoints::new(600, 500, 400);
        assert_eq!(bp, Breakpoints::new(600, 600, 600));
        assert_eq!(bp.classify_width(601), Bucket::Four);
    }

    #[test]
    fn thresholds_table() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.threshold(Bucket::Two), Some(768));
        assert_eq!(bp.threshold(Bucket::Four), None);
        assert_eq!(bp.thresholds()[2], (Bucket::Three, Some(1024)));
    }

    #[test]
    fn classifier_pin_and_unpin() {
        let mut c = ViewportClassifier::default();
        assert_eq!(c.classify(900), Bucket::Three);
        c.set_manual_override(Some(Bucket::Two));
        assert_eq!(c.classify(900), Bucket::Two);
        assert_eq!(c.classify_auto(900), Bucket::Three);
        c.set_manual_override(None);
        assert_eq!(c.classify(900), Bucket::Three);
    }
}
