#![forbid(unsafe_code)]

//! Widget catalog: which view a widget shows.
//!
//! Dispatch is keyed on the widget number, never on its id, title or kind:
//!
//! | Number | View |
//! |--------|------|
//! | 1 | weather |
//! | 2 | invoices bar chart |
//! | 3 | task list |
//! | 4 | cash-flow bar chart |
//! | 5 | bills bar chart |
//! | 6 | savings account |
//! | 7 | current account |
//! | 8 | expense claims |
//! | other | numbered box |
//!
//! [`render`] is pure. Weather readings and task lists change over a
//! session, so [`LiveWidgets`] keeps that state per widget id and renders
//! from it.

use std::collections::HashMap;

use gridboard_core::{WidgetData, WidgetId};

use crate::account::{self, Account};
use crate::bar_chart::{self, BarChart};
use crate::expenses::ExpenseClaims;
use crate::number::NumberBox;
use crate::rng::SeededRng;
use crate::todo::TodoList;
use crate::weather::WeatherReading;

/// Rendered content of one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Current conditions (number 1).
    Weather(WeatherReading),
    /// Invoices, cash flow or bills (numbers 2, 4, 5).
    BarChart(BarChart),
    /// Editable task list (number 3).
    Todo(TodoList),
    /// Savings or current account balance (numbers 6, 7).
    Account(Account),
    /// Expense claims with a pending total (number 8).
    Expenses(ExpenseClaims),
    /// Fallback for every other number.
    Number(NumberBox),
}

impl View {
    /// Short name of the variant, for logs and snapshots.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Weather(_) => "weather",
            Self::BarChart(_) => "bar_chart",
            Self::Todo(_) => "todo",
            Self::Account(_) => "account",
            Self::Expenses(_) => "expenses",
            Self::Number(_) => "number",
        }
    }

    /// Plain-text body lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Weather(v) => v.lines(),
            Self::BarChart(v) => v.lines(),
            Self::Todo(v) => v.lines(),
            Self::Account(v) => v.lines(),
            Self::Expenses(v) => v.lines(),
            Self::Number(v) => v.lines(),
        }
    }
}

/// View for `widget` with seeded data.
#[must_use]
pub fn render(widget: &WidgetData) -> View {
    match widget.number_or_zero() {
        1 => View::Weather(WeatherReading::default()),
        2 => View::BarChart(bar_chart::invoices()),
        3 => View::Todo(TodoList::default()),
        4 => View::BarChart(bar_chart::cash_flow()),
        5 => View::BarChart(bar_chart::bills()),
        6 => View::Account(account::savings()),
        7 => View::Account(account::current()),
        8 => View::Expenses(ExpenseClaims::default()),
        n => View::Number(NumberBox::new(n)),
    }
}

/// Session state for stateful views, keyed by widget id.
#[derive(Debug, Clone)]
pub struct LiveWidgets {
    weather: HashMap<WidgetId, WeatherReading>,
    todos: HashMap<WidgetId, TodoList>,
    rng: SeededRng,
}

impl Default for LiveWidgets {
    fn default() -> Self {
        Self::new(SeededRng::default())
    }
}

impl LiveWidgets {
    #[must_use]
    pub fn new(rng: SeededRng) -> Self {
        Self {
            weather: HashMap::new(),
            todos: HashMap::new(),
            rng,
        }
    }

    /// Create state for newly shown widgets and drop state for widgets
    /// no longer shown.
    ///
    /// State follows the id, so a widget keeps its tasks across bucket
    /// switches as long as it is present in the new layout.
    pub fn sync(&mut self, widgets: &[WidgetData]) {
        let mut seen_weather = Vec::new();
        let mut seen_todo = Vec::new();
        for widget in widgets {
            match widget.number_or_zero() {
                1 => {
                    self.weather.entry(widget.id.clone()).or_default();
                    seen_weather.push(&widget.id);
                }
                3 => {
                    self.todos.entry(widget.id.clone()).or_default();
                    seen_todo.push(&widget.id);
                }
                _ => {}
            }
        }
        #[cfg(feature = "tracing")]
        let before = self.weather.len() + self.todos.len();
        self.weather.retain(|id, _| seen_weather.contains(&id));
        self.todos.retain(|id, _| seen_todo.contains(&id));
        #[cfg(feature = "tracing")]
        {
            let dropped = before - (self.weather.len() + self.todos.len());
            if dropped > 0 {
                tracing::debug!(dropped, "dropped live widget state");
            }
        }
    }

    /// View for `widget`, using live state where there is any.
    #[must_use]
    pub fn view(&self, widget: &WidgetData) -> View {
        match widget.number_or_zero() {
            1 => self
                .weather
                .get(&widget.id)
                .map_or_else(|| render(widget), |w| View::Weather(w.clone())),
            3 => self
                .todos
                .get(&widget.id)
                .map_or_else(|| render(widget), |t| View::Todo(t.clone())),
            _ => render(widget),
        }
    }

    /// Forget all live state. The random source keeps its position.
    pub fn clear(&mut self) {
        self.weather.clear();
        self.todos.clear();
    }

    /// Draw fresh readings for every live weather widget.
    pub fn refresh_weather(&mut self) -> usize {
        let mut ids: Vec<WidgetId> = self.weather.keys().cloned().collect();
        // Draw in id order so a seed always yields the same readings.
        ids.sort();
        for id in &ids {
            if let Some(reading) = self.weather.get_mut(id) {
                reading.refresh(&mut self.rng);
            }
        }
        ids.len()
    }

    /// Reading for a weather widget.
    #[must_use]
    pub fn weather(&self, id: &WidgetId) -> Option<&WeatherReading> {
        self.weather.get(id)
    }

    /// Task list for a todo widget.
    #[must_use]
    pub fn todos(&self, id: &WidgetId) -> Option<&TodoList> {
        self.todos.get(id)
    }

    /// Mutable task list for a todo widget.
    pub fn todos_mut(&mut self, id: &WidgetId) -> Option<&mut TodoList> {
        self.todos.get_mut(id)
    }
}
