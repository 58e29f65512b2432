//! View Derivation
//!
//! Everything the dashboard shows is a pure function of the static dataset
//! and the current `SelectionState`.
//!
//! ## Architecture
//!
//! - **selection**: the two optional user selections
//! - **derive**: country wins, year summary, winners list
//! - **map**: map focus and the choropleth figure document
//! - **dispatch**: event → (new state, fragments to redraw)
//!
//! The browser front end (`worldcup-ui`) renders fragments; this crate only
//! derives them.
//!
//! ```text
//! ViewEvent ──dispatch──▶ SelectionState' + [Fragment] ──websocket──▶ UI panels / map
//! ```
//!
//! ## Example
//!
//! ```rust
//! use worldcup_history::data::Dataset;
//! use worldcup_history::view::{dispatch, SelectionState, ViewEvent, Fragment, CountryWins};
//!
//! let dataset = Dataset::builtin().unwrap();
//! let out = dispatch(
//!     &dataset,
//!     &SelectionState::default(),
//!     ViewEvent::SelectCountry(Some("Brazil".to_string())),
//! );
//! assert_eq!(
//!     out.fragments[0],
//!     Fragment::CountryWins(CountryWins::Wins { country: "Brazil".to_string(), wins: 5 })
//! );
//! ```

mod derive;
mod dispatch;
mod map;
mod selection;

pub use derive::{country_wins, winners_list, year_summary, CountryWins, YearSummary};
pub use dispatch::{dispatch, initial_view, Dispatch, Fragment, ViewEvent};
pub use map::{map_figure, map_focus, MapFocus, FOCUS_SCALE, WORLD_SCALE};
pub use selection::SelectionState;
