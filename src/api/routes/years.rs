//! Year Routes
//!
//! - GET /api/v1/years - Tournament years, newest first
//! - GET /api/v1/years/:year - Final summary for one year

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{parse_year, YearListResponse, YearSummaryResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::view::year_summary;

/// GET /api/v1/years
pub async fn list_years(State(state): State<Arc<AppState>>) -> Json<YearListResponse> {
    let years = state.dataset.years_desc();
    Json(YearListResponse {
        total: years.len(),
        years,
    })
}

/// GET /api/v1/years/:year
///
/// Years without a tournament answer 200 with `status = "no_data"`.
pub async fn get_year_summary(
    State(state): State<Arc<AppState>>,
    Path(year): Path<String>,
) -> ApiResult<Json<YearSummaryResponse>> {
    let year = parse_year(&year)?;
    Ok(Json(year_summary(&state.dataset, Some(year)).into()))
}
