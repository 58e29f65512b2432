//! World Cup History Dashboard
//!
//! Browser front end for the World Cup History server, built with Leptos (WASM).
//!
//! # Features
//!
//! - Choropleth map of titles per country (Plotly)
//! - Country and year pickers driving the detail panels
//! - Live updates over the `/ws` dashboard session
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. Selections live in
//! signals; every change is sent to the server, which answers with freshly
//! derived panel content. Picker options come from the REST API.
//!
//! Build with `trunk build --release`; the server serves `dist/` at `/`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
