//! View Routes
//!
//! Stateless access to the derived display content. The selection travels in
//! the query string, so every request recomputes from the static tables.
//!
//! - GET /api/v1/view - Every fragment for a selection
//! - GET /api/v1/winners - All countries that ever won
//! - GET /api/v1/map - Map figure document

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{MapParams, SelectionParams, ViewResponse, WinnersResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::{country_wins, map_figure, map_focus, winners_list, year_summary};

/// GET /api/v1/view?country=&year=
pub async fn get_view(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
) -> ApiResult<Json<ViewResponse>> {
    let selection = params.into_selection()?;
    let dataset = &state.dataset;

    tracing::debug!(
        country = ?selection.country,
        year = ?selection.year,
        "Deriving view"
    );

    Ok(Json(ViewResponse {
        country_wins: country_wins(dataset, selection.country()),
        year_summary: year_summary(dataset, selection.year).into(),
        winners: winners_list(dataset),
        map: map_focus(dataset, selection.country()),
        selection,
    }))
}

/// GET /api/v1/winners
pub async fn get_winners(State(state): State<Arc<AppState>>) -> Json<WinnersResponse> {
    let winners = winners_list(&state.dataset);
    Json(WinnersResponse {
        total: winners.len(),
        winners,
    })
}

/// GET /api/v1/map?country=
///
/// Unknown or empty country names return the world view.
pub async fn get_map(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MapParams>,
) -> Json<serde_json::Value> {
    let country = params.country.as_deref().filter(|c| !c.is_empty());
    let focus = map_focus(&state.dataset, country);
    Json(map_figure(&state.dataset, &focus))
}
