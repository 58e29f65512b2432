//! Event dispatch
//!
//! Maps each input event to the new selection state and the fragments that
//! must be redrawn. Each event type drives a fixed set of derivations.

use super::derive::{country_wins, winners_list, year_summary, CountryWins, YearSummary};
use super::map::{map_focus, MapFocus};
use super::selection::SelectionState;
use crate::data::Dataset;

/// Input event from the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Country picker changed (None = cleared)
    SelectCountry(Option<String>),
    /// Year picker changed (None = cleared)
    SelectYear(Option<u16>),
    /// Map clicked; the payload is not inspected
    MapClick(serde_json::Value),
}

impl ViewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::SelectCountry(_) => "select_country",
            ViewEvent::SelectYear(_) => "select_year",
            ViewEvent::MapClick(_) => "map_click",
        }
    }
}

/// Freshly derived content for one panel
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    CountryWins(CountryWins),
    YearSummary(YearSummary),
    WinnersList(Vec<String>),
    Map(MapFocus),
}

/// Outcome of one event: the replacement state and the fragments to redraw
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub state: SelectionState,
    pub fragments: Vec<Fragment>,
}

/// Apply an event to the current selection
pub fn dispatch(dataset: &Dataset, state: &SelectionState, event: ViewEvent) -> Dispatch {
    match event {
        ViewEvent::SelectCountry(country) => {
            let state = state.with_country(country);
            let fragments = vec![
                Fragment::CountryWins(country_wins(dataset, state.country())),
                Fragment::Map(map_focus(dataset, state.country())),
            ];
            Dispatch { state, fragments }
        }
        ViewEvent::SelectYear(year) => {
            let state = state.with_year(year);
            let fragments = vec![Fragment::YearSummary(year_summary(dataset, state.year))];
            Dispatch { state, fragments }
        }
        ViewEvent::MapClick(_) => Dispatch {
            state: state.clone(),
            fragments: vec![Fragment::WinnersList(winners_list(dataset))],
        },
    }
}

/// Every fragment for a selection, as on first page load
pub fn initial_view(dataset: &Dataset, state: &SelectionState) -> Vec<Fragment> {
    vec![
        Fragment::Map(map_focus(dataset, state.country())),
        Fragment::CountryWins(country_wins(dataset, state.country())),
        Fragment::YearSummary(year_summary(dataset, state.year)),
        Fragment::WinnersList(winners_list(dataset)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_select_country_updates_wins_and_map() {
        let dataset = dataset();
        let out = dispatch(
            &dataset,
            &SelectionState::default(),
            ViewEvent::SelectCountry(Some("Brazil".to_string())),
        );

        assert_eq!(out.state.country(), Some("Brazil"));
        assert_eq!(out.fragments.len(), 2);
        assert_eq!(
            out.fragments[0],
            Fragment::CountryWins(CountryWins::Wins {
                country: "Brazil".to_string(),
                wins: 5
            })
        );
        assert!(matches!(out.fragments[1], Fragment::Map(MapFocus::Country { .. })));
    }

    #[test]
    fn test_deselect_country_empties_panel() {
        let dataset = dataset();
        let selected = dispatch(
            &dataset,
            &SelectionState::default(),
            ViewEvent::SelectCountry(Some("Brazil".to_string())),
        );
        let cleared = dispatch(&dataset, &selected.state, ViewEvent::SelectCountry(None));

        assert_eq!(cleared.state, SelectionState::default());
        assert_eq!(cleared.fragments[0], Fragment::CountryWins(CountryWins::Empty));
        assert_eq!(cleared.fragments[1], Fragment::Map(MapFocus::World));
    }

    #[test]
    fn test_year_after_valid_year_shows_no_data() {
        let dataset = dataset();
        let first = dispatch(&dataset, &SelectionState::default(), ViewEvent::SelectYear(Some(2022)));
        let second = dispatch(&dataset, &first.state, ViewEvent::SelectYear(Some(1942)));

        assert_eq!(second.state.year, Some(1942));
        assert_eq!(
            second.fragments,
            vec![Fragment::YearSummary(YearSummary::NoData { year: 1942 })]
        );
    }

    #[test]
    fn test_year_does_not_touch_country() {
        let dataset = dataset();
        let state = SelectionState::new(Some("Italy".to_string()), None);
        let out = dispatch(&dataset, &state, ViewEvent::SelectYear(Some(2006)));

        assert_eq!(out.state.country(), Some("Italy"));
        assert_eq!(out.fragments.len(), 1);
        assert!(matches!(out.fragments[0], Fragment::YearSummary(YearSummary::Match(_))));
    }

    #[test]
    fn test_map_click_ignores_payload() {
        let dataset = dataset();
        let state = SelectionState::new(Some("Spain".to_string()), Some(2010));

        let a = dispatch(&dataset, &state, ViewEvent::MapClick(json!({"points": [{"location": "ESP"}]})));
        let b = dispatch(&dataset, &state, ViewEvent::MapClick(serde_json::Value::Null));

        assert_eq!(a, b);
        assert_eq!(a.state, state);
        assert_eq!(a.fragments, vec![Fragment::WinnersList(winners_list(&dataset))]);
    }

    #[test]
    fn test_winners_invariant_under_selection() {
        let dataset = dataset();
        let expected = winners_list(&dataset);
        let mut state = SelectionState::default();

        for event in [
            ViewEvent::SelectCountry(Some("Germany".to_string())),
            ViewEvent::SelectYear(Some(1954)),
            ViewEvent::SelectYear(None),
            ViewEvent::SelectCountry(None),
        ] {
            state = dispatch(&dataset, &state, event).state;
            let click = dispatch(&dataset, &state, ViewEvent::MapClick(json!(null)));
            assert_eq!(click.fragments, vec![Fragment::WinnersList(expected.clone())]);
        }
    }

    #[test]
    fn test_initial_view_covers_every_panel() {
        let dataset = dataset();
        let fragments = initial_view(&dataset, &SelectionState::default());

        assert_eq!(
            fragments,
            vec![
                Fragment::Map(MapFocus::World),
                Fragment::CountryWins(CountryWins::Empty),
                Fragment::YearSummary(YearSummary::Empty),
                Fragment::WinnersList(winners_list(&dataset)),
            ]
        );
    }
}
