//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::data::{CountryStanding, ScoreDetails};
use crate::view::{CountryWins, MapFocus, SelectionState, YearSummary};

// ============================================
// SELECTION DTOs
// ============================================

/// Selection carried in the query string (`?country=Brazil&year=2002`)
///
/// Empty values mean "not selected", matching a cleared picker.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl SelectionParams {
    pub fn into_selection(self) -> ApiResult<SelectionState> {
        let year = match self.year.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_year(text)?),
        };

        Ok(SelectionState::default()
            .with_country(self.country)
            .with_year(year))
    }
}

/// Parse a year path or query segment
pub fn parse_year(text: &str) -> ApiResult<u16> {
    text.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("Invalid year: {}", text)))
}

// ============================================
// VIEW DTOs
// ============================================

/// Year summary plus the parsed score, when it could be parsed
#[derive(Debug, Serialize)]
pub struct YearSummaryResponse {
    #[serde(flatten)]
    pub summary: YearSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ScoreDetails>,
}

impl From<YearSummary> for YearSummaryResponse {
    fn from(summary: YearSummary) -> Self {
        let details = match &summary {
            YearSummary::Match(m) => m.score_details(),
            _ => None,
        };
        Self { summary, details }
    }
}

/// Every display fragment for one selection
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub selection: SelectionState,
    pub country_wins: CountryWins,
    pub year_summary: YearSummaryResponse,
    pub winners: Vec<String>,
    pub map: MapFocus,
}

/// Winners list response
#[derive(Debug, Serialize)]
pub struct WinnersResponse {
    pub total: usize,
    pub winners: Vec<String>,
}

/// Map query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MapParams {
    #[serde(default)]
    pub country: Option<String>,
}

// ============================================
// LIST DTOs
// ============================================

/// Standings list response
#[derive(Debug, Serialize)]
pub struct CountryListResponse {
    pub total: usize,
    pub countries: Vec<CountryStanding>,
}

/// Year list response (newest first)
#[derive(Debug, Serialize)]
pub struct YearListResponse {
    pub total: usize,
    pub years: Vec<u16>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Open WebSocket sessions
    pub sessions: usize,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Export query parameters
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Output format: csv, json
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_export_format() -> String {
    "csv".to_string()
}
