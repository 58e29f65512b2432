//! Selection Pickers
//!
//! The country and year dropdowns. Changing one writes its selection signal;
//! the session forwards the change to the server.

use leptos::*;

use crate::state::global::{parse_country, parse_year, DashboardState};

/// Country dropdown, alphabetical
#[component]
pub fn CountryPicker() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    let on_change = move |ev: ev::Event| {
        state.selected_country.set(parse_country(&event_target_value(&ev)));
    };

    view! {
        <select id="country-selector" class="form-select" on:change=on_change>
            <option value="">"Select a country to view"</option>
            {move || {
                state.countries.get()
                    .into_iter()
                    .map(|country| view! { <option value=country.clone()>{country}</option> })
                    .collect_view()
            }}
        </select>
    }
}

/// Year dropdown, newest first
#[component]
pub fn YearPicker() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    let on_change = move |ev: ev::Event| {
        state.selected_year.set(parse_year(&event_target_value(&ev)));
    };

    view! {
        <select id="year-selector" class="form-select" on:change=on_change>
            <option value="">"Select a year to view summary"</option>
            {move || {
                state.years.get()
                    .into_iter()
                    .map(|year| view! { <option value=year.to_string()>{year}</option> })
                    .collect_view()
            }}
        </select>
    }
}
