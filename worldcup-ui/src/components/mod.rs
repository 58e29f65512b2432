//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod map;
pub mod panels;
pub mod pickers;

pub use map::ChoroplethMap;
pub use panels::{CountryWinsPanel, WinnersList, YearSummaryPanel};
pub use pickers::{CountryPicker, YearPicker};
