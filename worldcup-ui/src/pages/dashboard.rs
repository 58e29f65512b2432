//! Dashboard Page
//!
//! Map on the left; pickers, detail panels and the winners list on the right.

use leptos::*;

use crate::api;
use crate::components::{
    ChoroplethMap, CountryPicker, CountryWinsPanel, WinnersList, YearPicker, YearSummaryPanel,
};
use crate::state::global::DashboardState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    // Picker options are static; fetch them once on mount
    spawn_local(async move {
        match api::fetch_countries().await {
            Ok(countries) => state.countries.set(countries),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch countries: {}", e).into());
                state.show_error(&e);
            }
        }

        match api::fetch_years().await {
            Ok(years) => state.years.set(years),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch years: {}", e).into());
                state.show_error(&e);
            }
        }
    });

    view! {
        <h1 class="mb-4 text-center">"FIFA Soccer World Cup History"</h1>

        <div class="row">
            <div class="col-8">
                <ChoroplethMap />
            </div>

            <div class="col-4">
                <div style="position: sticky; top: 20px">
                    <h5 class="mt-3">"Select a Country:"</h5>
                    <CountryPicker />
                    <CountryWinsPanel />

                    <hr />

                    <h5 class="mt-3">"Select a Year:"</h5>
                    <YearPicker />
                    <YearSummaryPanel />

                    <hr />

                    <h4 class="mt-3">"All countries that ever won a World Cup:"</h4>
                    <WinnersList />
                </div>
            </div>
        </div>
    }
}
