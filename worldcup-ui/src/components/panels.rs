//! Detail Panels
//!
//! Country wins, year summary and the winners list. Each renders whatever the
//! server last derived for it; the empty state renders nothing.

use leptos::*;

use crate::state::global::{CountryWins, DashboardState, YearSummary};

const WINS_COLOR: &str = "#3F007D";

pub const NO_DATA_FOR_YEAR: &str = "No data available for this year";

pub fn wins_heading(country: &str) -> String {
    format!("{} World Cup Wins:", country)
}

pub fn summary_heading(year: u16) -> String {
    format!("{} World Cup Summary:", year)
}

pub fn unknown_country_text(country: &str) -> String {
    format!("No data available for {}", country)
}

/// Title count for the selected country
#[component]
pub fn CountryWinsPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div id="country-wins-display" class="mt-3">
            {move || match state.country_wins.get() {
                CountryWins::Empty => view! {}.into_view(),
                CountryWins::Wins { country, wins } => view! {
                    <div>
                        <h5>{wins_heading(&country)}</h5>
                        <h2 style=format!("color: {}", WINS_COLOR)>{wins}</h2>
                    </div>
                }
                .into_view(),
                CountryWins::Unknown { country } => view! {
                    <div style="color: red">{unknown_country_text(&country)}</div>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Final of the selected year
#[component]
pub fn YearSummaryPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div id="year-summary-display" class="mt-3">
            {move || match state.year_summary.get() {
                YearSummary::Empty => view! {}.into_view(),
                YearSummary::Match(m) => view! {
                    <div>
                        <h5>{summary_heading(m.year)}</h5>
                        <p>"Winner: " {m.winner}</p>
                        <p>"Runner-Up: " {m.runner_up}</p>
                        <p>"Score: " {m.score}</p>
                    </div>
                }
                .into_view(),
                YearSummary::NoData { .. } => view! {
                    <div style="color: red">{NO_DATA_FOR_YEAR}</div>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Every country that ever won
#[component]
pub fn WinnersList() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div id="winners-list" class="mb-3">
            <ul>
                {move || {
                    state.winners.get()
                        .into_iter()
                        .map(|country| view! { <li>{country}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_text() {
        assert_eq!(wins_heading("Brazil"), "Brazil World Cup Wins:");
        assert_eq!(summary_heading(2022), "2022 World Cup Summary:");
        assert_eq!(unknown_country_text("Narnia"), "No data available for Narnia");
    }
}
