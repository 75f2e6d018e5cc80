#![forbid(unsafe_code)]

//! Headless dashboard snapshots.

use std::fmt::Write as _;

use gridboard_core::{Bucket, WidgetId};
use gridboard_layout::GridCell;
use gridboard_runtime::StatusTone;

/// One rendered widget tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: WidgetId,
    pub number: i64,
    pub title: String,
    /// View variant name (`"weather"`, `"bar_chart"`, ...).
    pub view: &'static str,
    pub cell: GridCell,
    pub lines: Vec<String>,
}

/// Visible status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub text: String,
    pub tone: StatusTone,
}

/// Everything the presentational layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub bucket: Bucket,
    pub manual_override: Option<Bucket>,
    pub override_defaults: bool,
    /// `"3 Columns (Manual)"`.
    pub columns_label: String,
    /// `"10 Widgets"`.
    pub widgets_label: String,
    pub tiles: Vec<Tile>,
    pub status: Option<StatusSnapshot>,
}

impl DashboardSnapshot {
    /// Tile for `id`.
    #[must_use]
    pub fn tile(&self, id: &WidgetId) -> Option<&Tile> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    /// Widget numbers in display order.
    #[must_use]
    pub fn numbers(&self) -> Vec<i64> {
        self.tiles.iter().map(|t| t.number).collect()
    }

    /// Plain-text dump: header, status, then one block per tile in row-major
    /// order.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} | {}", self.columns_label, self.widgets_label);
        if self.override_defaults {
            out.push_str("[override defaults]\n");
        }
        if let Some(status) = &self.status {
            let _ = writeln!(out, "> {}", status.text);
        }
        for tile in &self.tiles {
            let _ = writeln!(
                out,
                "[{},{}] #{} {}",
                tile.cell.row, tile.cell.column, tile.number, tile.title
            );
            for line in &tile.lines {
                let _ = writeln!(out, "    {line}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tile(id: &str, number: i64, row: usize, column: usize) -> Tile {
        Tile {
            id: WidgetId::from(id),
            number,
            title: "Widget".into(),
            view: "number",
            cell: GridCell { row, column },
            lines: vec![number.to_string()],
        }
    }

    #[test]
    fn text_dump() {
        let snapshot = DashboardSnapshot {
            bucket: Bucket::Two,
            manual_override: None,
            override_defaults: true,
            columns_label: "2 Columns (Auto)".into(),
            widgets_label: "2 Widgets".into(),
            tiles: vec![tile("a", 9, 0, 0), tile("b", 10, 0, 1)],
            status: Some(StatusSnapshot {
                text: "Layout saved".into(),
                tone: StatusTone::Success,
            }),
        };
        assert_eq!(
            snapshot.to_text(),
            "2 Columns (Auto) | 2 Widgets\n\
             [override defaults]\n\
             > Layout saved\n\
             [0,0] #9 Widget\n    9\n\
             [0,1] #10 Widget\n    10\n"
        );
        assert_eq!(snapshot.numbers(), vec![9, 10]);
        assert_eq!(snapshot.tile(&WidgetId::from("b")).map(|t| t.number), Some(10));
    }
}
