//! # World Cup History
//!
//! An interactive dashboard of FIFA World Cup finals: winners, runners-up and
//! scores by year, plus title counts per country on a world map.
//!
//! ## Features
//!
//! - **Static tables**: every final from 1930 to 2022 and each champion's title count
//! - **Pure view derivation**: panels are recomputed from the selection on every change
//! - **Live dashboard**: a WebSocket session per browser tab (`worldcup-ui`) drives the panels and the map
//! - **Export**: both tables as CSV or JSON
//!
//! ## Modules
//!
//! - [`data`]: The dataset, score parsing and export
//! - [`view`]: Selection state, derivations and the map figure
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Dashboard sessions
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use worldcup_history::data::Dataset;
//! use worldcup_history::view::{year_summary, YearSummary};
//!
//! let dataset = Dataset::builtin().unwrap();
//!
//! match year_summary(&dataset, Some(2022)) {
//!     YearSummary::Match(m) => assert_eq!(m.winner, "Argentina"),
//!     other => panic!("unexpected {:?}", other),
//! }
//!
//! assert_eq!(year_summary(&dataset, Some(1942)), YearSummary::NoData { year: 1942 });
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod view;
pub mod websocket;

// Re-export top-level types for convenience
pub use data::{
    CountryStanding, DataError, DataResult, Dataset, ExportFormat, ExportTable, MatchResult,
    ScoreDetails,
};

pub use view::{
    country_wins, dispatch, map_figure, map_focus, winners_list, year_summary, CountryWins,
    Dispatch, Fragment, MapFocus, SelectionState, ViewEvent, YearSummary,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ServerMessage, Session};

pub use config::{Config, ConfigError, ExportConfig, LoggingConfig, ServerConfig};
