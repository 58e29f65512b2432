//! App Root Component
//!
//! Provides dashboard state, opens the WebSocket session and lays out the page.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::pages::Dashboard;
use crate::state::global::{provide_dashboard_state, DashboardState};
use crate::state::websocket::{bind_selection, init_websocket};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    let state = expect_context::<DashboardState>();
    let client = init_websocket(state, &api::get_server_base());
    bind_selection(state, client.clone());
    provide_context(client);

    view! {
        <Router>
            <div class="container-fluid pb-5">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>

                <ErrorBanner />
                <Footer />
            </div>
        </Router>
    }
}

/// Server errors, cleared after a few seconds
#[component]
fn ErrorBanner() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        {move || state.error.get().map(|message| view! {
            <div class="alert alert-danger fixed-top m-3" role="alert">{message}</div>
        })}
    }
}

/// Footer showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <footer class="fixed-bottom bg-light border-top py-2 px-3 small d-flex justify-content-between">
            {move || {
                if state.ws_connected.get() {
                    view! { <span class="text-success">"Connected"</span> }.into_view()
                } else {
                    view! { <span class="text-danger">"Disconnected"</span> }.into_view()
                }
            }}

            <span class="text-muted">
                {move || {
                    state.last_update.get()
                        .and_then(chrono::DateTime::from_timestamp_millis)
                        .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Waiting for server".to_string())
                }}
            </span>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center my-5">
            <h1 class="mb-3">"Page Not Found"</h1>
            <A href="/" class="btn btn-primary">"Back to the dashboard"</A>
        </div>
    }
}
