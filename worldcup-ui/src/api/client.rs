//! HTTP API Client
//!
//! Picker options come from the World Cup History REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Server used when the page is not served by it (e.g. `trunk serve`)
pub const DEFAULT_SERVER_BASE: &str = "http://localhost:8053";

const SERVER_URL_KEY: &str = "worldcup_server_url";

/// Server base URL: local storage override, else the page origin
pub fn get_server_base() -> String {
    let url = web_sys::window()
        .and_then(|window| {
            let stored = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|storage| storage.get_item(SERVER_URL_KEY).ok().flatten());
            stored.or_else(|| window.location().origin().ok())
        })
        .unwrap_or_else(|| DEFAULT_SERVER_BASE.to_string());

    url.trim_end_matches('/').to_string()
}

pub fn get_api_base() -> String {
    format!("{}/api/v1", get_server_base())
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct CountryListResponse {
    pub countries: Vec<CountryEntry>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CountryEntry {
    pub country: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct YearListResponse {
    pub years: Vec<u16>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

// ============ API Functions ============

/// Country picker options, alphabetical
pub async fn fetch_countries() -> Result<Vec<String>, String> {
    let response: CountryListResponse = get_json("/countries").await?;
    Ok(country_options(response.countries))
}

/// Year picker options, newest first as served
pub async fn fetch_years() -> Result<Vec<u16>, String> {
    let response: YearListResponse = get_json("/years").await?;
    Ok(response.years)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(match response.json::<ApiError>().await {
            Ok(error) => format!("{}: {}", error.error.code, error.error.message),
            Err(_) => format!("HTTP {}", response.status()),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

fn country_options(countries: Vec<CountryEntry>) -> Vec<String> {
    let mut names: Vec<String> = countries.into_iter().map(|c| c.country).collect();
    names.sort();
    names.dedup();
    names
}
