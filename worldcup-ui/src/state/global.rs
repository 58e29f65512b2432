//! Dashboard State
//!
//! Reactive state using Leptos signals. The selections are owned here; the
//! panel contents are whatever the server last derived for them.

use leptos::*;

/// Country wins panel content, as derived by the server
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountryWins {
    #[default]
    Empty,
    Wins {
        country: String,
        wins: u32,
    },
    Unknown {
        country: String,
    },
}

/// One World Cup final
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MatchResult {
    pub year: u16,
    pub winner: String,
    pub runner_up: String,
    pub score: String,
}

/// Year summary panel content, as derived by the server
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum YearSummary {
    #[default]
    Empty,
    Match(MatchResult),
    NoData {
        year: u16,
    },
}

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Country picker options, alphabetical
    pub countries: RwSignal<Vec<String>>,
    /// Year picker options, newest first
    pub years: RwSignal<Vec<u16>>,
    /// Selected country
    pub selected_country: RwSignal<Option<String>>,
    /// Selected year
    pub selected_year: RwSignal<Option<u16>>,
    pub country_wins: RwSignal<CountryWins>,
    pub year_summary: RwSignal<YearSummary>,
    pub winners: RwSignal<Vec<String>>,
    /// Plotly figure document for the map
    pub figure: RwSignal<Option<serde_json::Value>>,
    /// WebSocket connection status
    pub ws_connected: RwSignal<bool>,
    /// Time of the last server message (ms since epoch)
    pub last_update: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        countries: create_rw_signal(Vec::new()),
        years: create_rw_signal(Vec::new()),
        selected_country: create_rw_signal(None),
        selected_year: create_rw_signal(None),
        country_wins: create_rw_signal(CountryWins::Empty),
        year_summary: create_rw_signal(YearSummary::Empty),
        winners: create_rw_signal(Vec::new()),
        figure: create_rw_signal(None),
        ws_connected: create_rw_signal(false),
        last_update: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl DashboardState {
    /// Record that the server just spoke
    pub fn touch(&self) {
        self.last_update.set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// Picker value to selection; the placeholder option is the empty string
pub fn parse_country(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Picker value to selection; anything but a year clears it
pub fn parse_year(value: &str) -> Option<u16> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_wins_from_server_json() {
        let wins: CountryWins =
            serde_json::from_str(r#"{"status":"wins","country":"Brazil","wins":5}"#).unwrap();
        assert_eq!(
            wins,
            CountryWins::Wins {
                country: "Brazil".to_string(),
                wins: 5
            }
        );

        let empty: CountryWins = serde_json::from_str(r#"{"status":"empty"}"#).unwrap();
        assert_eq!(empty, CountryWins::Empty);
    }

    #[test]
    fn test_year_summary_from_server_json() {
        let summary: YearSummary = serde_json::from_str(
            r#"{"status":"match","year":2022,"winner":"Argentina","runner_up":"France","score":"3–3 (a.e.t.) (4–2 p)"}"#,
        )
        .unwrap();
        match summary {
            YearSummary::Match(m) => {
                assert_eq!(m.winner, "Argentina");
                assert_eq!(m.runner_up, "France");
            }
            other => panic!("Expected a final, got {:?}", other),
        }

        let none: YearSummary = serde_json::from_str(r#"{"status":"no_data","year":1942}"#).unwrap();
        assert_eq!(none, YearSummary::NoData { year: 1942 });
    }

    #[test]
    fn test_picker_values() {
        assert_eq!(parse_country(""), None);
        assert_eq!(parse_country("Spain"), Some("Spain".to_string()));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("1954"), Some(1954));
    }
}
