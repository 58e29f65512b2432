//! Country Routes
//!
//! - GET /api/v1/countries - List all standings
//! - GET /api/v1/countries/:country/wins - Title count for one country

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::CountryListResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::{country_wins, CountryWins};

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountryListResponse> {
    let countries = state.dataset.standings().to_vec();
    Json(CountryListResponse {
        total: countries.len(),
        countries,
    })
}

/// GET /api/v1/countries/:country/wins
///
/// The dashboard degrades unknown names to a placeholder; the API reports them.
pub async fn get_country_wins(
    State(state): State<Arc<AppState>>,
    Path(country): Path<String>,
) -> ApiResult<Json<CountryWins>> {
    match country_wins(&state.dataset, Some(&country)) {
        CountryWins::Unknown { country } => Err(ApiError::NotFound(format!(
            "Country '{}' has never won a World Cup",
            country
        ))),
        wins => Ok(Json(wins)),
    }
}
