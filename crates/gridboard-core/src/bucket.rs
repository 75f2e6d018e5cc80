#![forbid(unsafe_code)]

//! Column-count buckets.

use std::fmt;

/// One of the four column-count layout slots.
///
/// Each bucket owns an independently persisted widget order. The numeric
/// value is the number of grid columns rendered for that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    /// Single column (narrow phones).
    One,
    /// Two columns.
    Two,
    /// Three columns.
    Three,
    /// Four columns (desktop).
    Four,
}

impl Bucket {
    /// All buckets in ascending column order.
    pub const ALL: [Bucket; 4] = [Bucket::One, Bucket::Two, Bucket::Three, Bucket::Four];

    /// Number of grid columns.
    #[must_use]
    pub const fn columns(self) -> u8 {
        match self {
            Bucket::One => 1,
            Bucket::Two => 2,
            Bucket::Three => 3,
            Bucket::Four => 4,
        }
    }

    /// Bucket for a column count, if it is one of 1–4.
    #[must_use]
    pub const fn from_columns(columns: u8) -> Option<Self> {
        match columns {
            1 => Some(Bucket::One),
            2 => Some(Bucket::Two),
            3 => Some(Bucket::Three),
            4 => Some(Bucket::Four),
            _ => None,
        }
    }

    /// Key used for this bucket in persisted JSON maps (`"1"`–`"4"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Bucket::One => "1",
            Bucket::Two => "2",
            Bucket::Three => "3",
            Bucket::Four => "4",
        }
    }

    /// Parse a persisted map key back into a bucket.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        key.trim().parse::<u8>().ok().and_then(Self::from_columns)
    }

    /// Every bucket except `self`, in ascending order.
    pub fn others(self) -> impl Iterator<Item = Bucket> {
        Self::ALL.into_iter().filter(move |b| *b != self)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns())
    }
}
