//! Core data types for the World Cup tables
//!
//! - `MatchResult`: one World Cup final
//! - `CountryStanding`: title count and map anchor for one country
//! - `Dataset`: both tables, validated once and never mutated

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{DataError, DataResult};
use super::score::ScoreDetails;

/// Result of a single World Cup final
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Tournament year
    pub year: u16,
    /// Country that won the final
    pub winner: String,
    /// Country that lost the final
    pub runner_up: String,
    /// Free-text score, e.g. `3–3 (a.e.t.) (4–2 p)`
    pub score: String,
}

impl MatchResult {
    pub fn new(
        year: u16,
        winner: impl Into<String>,
        runner_up: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            year,
            winner: winner.into(),
            runner_up: runner_up.into(),
            score: score.into(),
        }
    }

    /// Structured view of the score text, if it follows the usual notation
    pub fn score_details(&self) -> Option<ScoreDetails> {
        ScoreDetails::parse(&self.score)
    }
}

/// Aggregate title count and geographic anchor for one country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryStanding {
    /// Display name
    pub country: String,
    /// ISO 3166-1 alpha-3 code used as the map location
    pub iso_code: String,
    /// Number of World Cup titles
    pub wins: u32,
    /// Label anchor latitude
    pub lat: f64,
    /// Label anchor longitude
    pub lon: f64,
}

impl CountryStanding {
    pub fn new(
        country: impl Into<String>,
        iso_code: impl Into<String>,
        wins: u32,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            country: country.into(),
            iso_code: iso_code.into(),
            wins,
            lat,
            lon,
        }
    }

    /// Hover text shown on the map marker
    pub fn hover_text(&self) -> String {
        format!("{}<br>World Cup Wins: {}", self.country, self.wins)
    }
}

/// The two static tables behind the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    matches: Vec<MatchResult>,
    standings: Vec<CountryStanding>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate years and ISO codes
    pub fn new(matches: Vec<MatchResult>, standings: Vec<CountryStanding>) -> DataResult<Self> {
        let mut years = HashSet::new();
        for m in &matches {
            if !years.insert(m.year) {
                return Err(DataError::DuplicateYear(m.year));
            }
        }

        let mut codes = HashSet::new();
        for s in &standings {
            if s.iso_code.len() != 3 || !s.iso_code.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(DataError::InvalidIso(s.iso_code.clone()));
            }
            if !codes.insert(s.iso_code.as_str()) {
                return Err(DataError::DuplicateIso(s.iso_code.clone()));
            }
        }

        Ok(Self { matches, standings })
    }

    /// All finals in table order (oldest first)
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// All standings in table order (most titles first)
    pub fn standings(&self) -> &[CountryStanding] {
        &self.standings
    }

    /// Find the final played in `year`
    pub fn find_match(&self, year: u16) -> Option<&MatchResult> {
        self.matches.iter().find(|m| m.year == year)
    }

    /// Find the standing for a country by display name
    pub fn find_standing(&self, country: &str) -> Option<&CountryStanding> {
        self.standings.iter().find(|s| s.country == country)
    }

    /// Tournament years, newest first (year picker order)
    pub fn years_desc(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.matches.iter().map(|m| m.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years
    }

    /// Standing countries, alphabetical (country picker order)
    pub fn countries_sorted(&self) -> Vec<String> {
        let mut countries: Vec<String> =
            self.standings.iter().map(|s| s.country.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }

    /// Highest title count, upper bound of the colour scale
    pub fn max_wins(&self) -> u32 {
        self.standings.iter().map(|s| s.wins).max().unwrap_or(0)
    }
}
