#![forbid(unsafe_code)]

//! Viewport classification matrix (width x override).
//!
//! # Invariants Tested
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Range     | Every width maps to one of the four buckets |
//! | Monotone  | Wider viewports never map to fewer columns |
//! | Edges     | 480/481, 768/769, 1024/1025 are the only transitions |
//! | Pin       | A manual override ignores width entirely |
//!
//! # Running Tests
//!
//! ```sh
//! cargo test -p gridboard-layout --test viewport_matrix
//! ```

use gridboard_layout::{Breakpoints, Bucket, GridPlacement, ViewportClassifier, classify};
use proptest::prelude::*;

fn log_jsonl(case: &str, width: u32, bucket: Bucket) {
    if std::env::var("VIEWPORT_LOG").is_ok() {
        eprintln!(r#"{{"event":"classify","case":"{case}","width":{width},"bucket":{bucket}}}"#);
    }
}

#[test]
fn transitions_happen_only_at_boundaries() {
    let mut transitions = Vec::new();
    let mut prev = classify(0, None);
    for width in 1..=2048 {
        let bucket = classify(width, None);
        if bucket != prev {
            log_jsonl("transition", width, bucket);
            transitions.push((width, bucket));
        }
        prev = bucket;
    }
    assert_eq!(
        transitions,
        vec![(481, Bucket::Two), (769, Bucket::Three), (1025, Bucket::Four)]
    );
}

#[test]
fn custom_breakpoints_shift_transitions() {
    let classifier = ViewportClassifier::new(Breakpoints::new(320, 640, 960));
    assert_eq!(classifier.classify(320), Bucket::One);
    assert_eq!(classifier.classify(321), Bucket::Two);
    assert_eq!(classifier.classify(961), Bucket::Four);
}

proptest! {
    #[test]
    fn classify_is_monotone(a in 0u32..4096, b in 0u32..4096) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo, None) <= classify(hi, None));
    }

    #[test]
    fn manual_override_ignores_width(width in any::<u32>(), cols in 1u8..=4) {
        let pinned = Bucket::from_columns(cols).unwrap();
        prop_assert_eq!(classify(width, Some(pinned)), pinned);
    }

    #[test]
    fn placement_covers_every_index_once(cols in 1u8..=4, len in 0usize..64) {
        let placement = GridPlacement::new(Bucket::from_columns(cols).unwrap(), len);
        let cells: Vec<_> = placement.cells().collect();
        prop_assert_eq!(cells.len(), len);
        for (i, cell) in cells.iter().enumerate() {
            prop_assert!(cell.column < usize::from(cols));
            prop_assert_eq!(placement.index_at(*cell), Some(i));
        }
    }
}
