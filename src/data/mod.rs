//! World Cup Data
//!
//! The static tables behind the dashboard:
//!
//! - **types**: `MatchResult`, `CountryStanding`, `Dataset`
//! - **tables**: the built-in 1930–2022 rows
//! - **score**: parsing of score text (extra time, penalties)
//! - **export**: CSV / JSON export of both tables
//! - **error**: Error types
//!
//! The dataset is built once at startup and shared read-only.

mod error;
mod export;
mod score;
mod tables;
mod types;

pub use error::{DataError, DataResult};
pub use export::{render_table, write_csv_files, ExportFormat, ExportTable};
pub use score::ScoreDetails;
pub use types::{CountryStanding, Dataset, MatchResult};
