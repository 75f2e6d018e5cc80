#![forbid(unsafe_code)]

//! Dashboard widget views.
//!
//! Each widget number maps to one [`View`] (see [`catalog`]). Views are
//! plain data with a `lines()` text rendering; drawing them is the host's
//! concern.
//!
//! # Feature Flags
//!
//! - `tracing`: debug logging of live-state bookkeeping.

pub mod account;
pub mod bar_chart;
pub mod catalog;
pub mod expenses;
pub mod format;
pub mod number;
pub mod rng;
pub mod todo;
pub mod weather;

pub use account::Account;
pub use bar_chart::{Bar, BarChart, BarColor};
pub use catalog::{LiveWidgets, View, render};
pub use expenses::{ClaimStatus, ExpenseClaim, ExpenseClaims};
pub use number::NumberBox;
pub use rng::SeededRng;
pub use todo::{TodoItem, TodoList};
pub use weather::{Condition, WeatherReading};
