#![forbid(unsafe_code)]

//! Bar chart view.
//!
//! Bar heights are proportional to the largest value over a fixed track of
//! [`TRACK_HEIGHT`] units, with a floor of [`MIN_BAR_HEIGHT`] so that small
//! values stay visible. Each bar carries a currency label unless its value
//! is zero.
//!
//! In text form, a bar becomes a row of block characters whose length is
//! the height scaled down to [`TEXT_BAR_WIDTH`] cells.

use crate::format;

/// Height of the tallest bar.
pub const TRACK_HEIGHT: f64 = 120.0;
/// Minimum drawn height of any bar.
pub const MIN_BAR_HEIGHT: f64 = 8.0;
/// Cells used by the tallest bar in [`BarChart::lines`].
pub const TEXT_BAR_WIDTH: usize = 20;

/// Bar fill colour, as a two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarColor {
    Green,
    Blue,
    Orange,
    #[default]
    Purple,
    Red,
}

impl BarColor {
    /// Top and bottom gradient stops.
    #[must_use]
    pub const fn stops(self) -> (&'static str, &'static str) {
        match self {
            Self::Green => ("#48bb78", "#38a169"),
            Self::Blue => ("#4299e1", "#3182ce"),
            Self::Orange => ("#ed8936", "#dd6b20"),
            Self::Purple => ("#9f7aea", "#805ad5"),
            Self::Red => ("#f56565", "#e53e3e"),
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub color: BarColor,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: i64, color: BarColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Labelled values drawn as proportional bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    bars: Vec<Bar>,
    prefix: &'static str,
}

impl BarChart {
    /// Chart with the default `$` prefix.
    #[must_use]
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars, prefix: "$" }
    }

    /// Override the value prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    fn max_value(&self) -> i64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }

    /// Drawn height of `bar` on the 0..=[`TRACK_HEIGHT`] track.
    #[must_use]
    pub fn height(&self, bar: &Bar) -> f64 {
        let max = self.max_value();
        if max <= 0 || bar.value <= 0 {
            return MIN_BAR_HEIGHT;
        }
        let scaled = bar.value as f64 / max as f64 * TRACK_HEIGHT;
        scaled.max(MIN_BAR_HEIGHT)
    }

    /// Value label, empty for zero.
    #[must_use]
    pub fn value_label(&self, bar: &Bar) -> String {
        if bar.value > 0 {
            format::money(self.prefix, bar.value)
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        self.bars
            .iter()
            .map(|bar| {
                let cells =
                    (self.height(bar) / TRACK_HEIGHT * TEXT_BAR_WIDTH as f64).round() as usize;
                let fill = "█".repeat(cells.max(1));
                let line = format!("{:<label_width$} {fill} {}", bar.label, self.value_label(bar));
                line.trim_end().to_owned()
            })
            .collect()
    }
}

/// Invoices owed, per client.
#[must_use]
pub fn invoices() -> BarChart {
    BarChart::new(vec![
        Bar::new("Client A", 2500, BarColor::Green),
        Bar::new("Client B", 1800, BarColor::Blue),
        Bar::new("Client C", 3200, BarColor::Orange),
        Bar::new("Client D", 950, BarColor::Purple),
    ])
}

/// Cash in and out, per month.
#[must_use]
pub fn cash_flow() -> BarChart {
    BarChart::new(vec![
        Bar::new("Jan In", 8500, BarColor::Green),
        Bar::new("Jan Out", 4200, BarColor::Red),
        Bar::new("Feb In", 9200, BarColor::Green),
        Bar::new("Feb Out", 3800, BarColor::Red),
    ])
}

/// Upcoming bills.
#[must_use]
pub fn bills() -> BarChart {
    BarChart::new(vec![
        Bar::new("Rent", 2000, BarColor::Red),
        Bar::new("Utilities", 350, BarColor::Orange),
        Bar::new("Software", 450, BarColor::Blue),
        Bar::new("Insurance", 280, BarColor::Purple),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_track() {
        let chart = invoices();
        let c = &chart.bars()[2];
        assert_eq!(chart.height(c), TRACK_HEIGHT);
        let a = &chart.bars()[0];
        assert!((chart.height(a) - 2500.0 / 3200.0 * 120.0).abs() < 1e-9);
    }

    #[test]
    fn small_values_keep_min_height() {
        let chart = BarChart::new(vec![
            Bar::new("big", 10_000, BarColor::Green),
            Bar::new("tiny", 1, BarColor::Red),
            Bar::new("zero", 0, BarColor::Red),
        ]);
        assert_eq!(chart.height(&chart.bars()[1]), MIN_BAR_HEIGHT);
        assert_eq!(chart.height(&chart.bars()[2]), MIN_BAR_HEIGHT);
        assert_eq!(chart.value_label(&chart.bars()[2]), "");
    }

    #[test]
    fn all_zero_chart_is_flat() {
        let chart = BarChart::new(vec![Bar::new("a", 0, BarColor::Blue)]);
        assert_eq!(chart.height(&chart.bars()[0]), MIN_BAR_HEIGHT);
        assert_eq!(chart.lines(), ["a █"]);
    }

    #[test]
    fn text_lines() {
        let lines = cash_flow().lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], format!("Feb In  {} $9,200", "█".repeat(20)));
        assert!(lines[0].ends_with("$8,500"));
        assert!(lines[1].starts_with("Jan Out █"));
    }

    #[test]
    fn custom_prefix() {
        let chart = bills().prefix("£");
        assert_eq!(chart.value_label(&chart.bars()[0]), "£2,000");
    }

    #[test]
    fn colours() {
        assert_eq!(BarColor::Green.stops(), ("#48bb78", "#38a169"));
        assert_eq!(bills().bars()[0].color, BarColor::Red);
    }
}
