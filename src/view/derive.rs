//! Display fragment derivation
//!
//! Pure lookups from the static dataset plus one selection value to the
//! content of one panel. Every call recomputes from scratch.

use serde::Serialize;

use crate::data::{Dataset, MatchResult};

/// Content of the selected-country panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountryWins {
    /// No country selected
    Empty,
    /// Title count for the selected country
    Wins { country: String, wins: u32 },
    /// Selected name has no standing; shown as a placeholder
    Unknown { country: String },
}

/// Content of the selected-year panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum YearSummary {
    /// No year selected
    Empty,
    /// The final played that year
    Match(MatchResult),
    /// No tournament that year
    NoData { year: u16 },
}

/// Wins lookup for the selected country
pub fn country_wins(dataset: &Dataset, country: Option<&str>) -> CountryWins {
    let Some(country) = country else {
        return CountryWins::Empty;
    };

    match dataset.find_standing(country) {
        Some(standing) => CountryWins::Wins {
            country: standing.country.clone(),
            wins: standing.wins,
        },
        None => {
            tracing::warn!(country = %country, "Selected country has no standing");
            CountryWins::Unknown {
                country: country.to_string(),
            }
        }
    }
}

/// Final summary for the selected year
pub fn year_summary(dataset: &Dataset, year: Option<u16>) -> YearSummary {
    let Some(year) = year else {
        return YearSummary::Empty;
    };

    match dataset.find_match(year) {
        Some(m) => YearSummary::Match(m.clone()),
        None => YearSummary::NoData { year },
    }
}

/// Every country that has won a World Cup, alphabetical and distinct
pub fn winners_list(dataset: &Dataset) -> Vec<String> {
    let mut winners: Vec<String> = dataset
        .standings()
        .iter()
        .filter(|s| s.wins > 0)
        .map(|s| s.country.clone())
        .collect();
    winners.sort();
    winners.dedup();
    winners
}

impl CountryWins {
    pub fn is_empty(&self) -> bool {
        matches!(self, CountryWins::Empty)
    }
}

impl YearSummary {
    pub fn is_empty(&self) -> bool {
        matches!(self, YearSummary::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::builtin().unwrap()
    }

    #[test]
    fn test_wins_for_every_standing() {
        let dataset = dataset();
        for s in dataset.standings() {
            assert_eq!(
                country_wins(&dataset, Some(&s.country)),
                CountryWins::Wins {
                    country: s.country.clone(),
                    wins: s.wins
                }
            );
        }
    }

    #[test]
    fn test_brazil_has_five() {
        let wins = country_wins(&dataset(), Some("Brazil"));
        assert_eq!(
            wins,
            CountryWins::Wins {
                country: "Brazil".to_string(),
                wins: 5
            }
        );
    }

    #[test]
    fn test_no_country_is_empty() {
        assert!(country_wins(&dataset(), None).is_empty());
    }

    #[test]
    fn test_unknown_country_degrades() {
        let wins = country_wins(&dataset(), Some("Netherlands"));
        assert_eq!(
            wins,
            CountryWins::Unknown {
                country: "Netherlands".to_string()
            }
        );
    }

    #[test]
    fn test_summary_for_every_year() {
        let dataset = dataset();
        for m in dataset.matches() {
            assert_eq!(year_summary(&dataset, Some(m.year)), YearSummary::Match(m.clone()));
        }
    }

    #[test]
    fn test_2022_final() {
        match year_summary(&dataset(), Some(2022)) {
            YearSummary::Match(m) => {
                assert_eq!(m.winner, "Argentina");
                assert_eq!(m.runner_up, "France");
                assert!(m.score.contains("3–3"));
                assert!(m.score.contains("4–2 p"));
            }
            other => panic!("Expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_non_tournament_years() {
        let dataset = dataset();
        assert_eq!(
            year_summary(&dataset, Some(1942)),
            YearSummary::NoData { year: 1942 }
        );
        assert_eq!(
            year_summary(&dataset, Some(1946)),
            YearSummary::NoData { year: 1946 }
        );
        assert!(year_summary(&dataset, None).is_empty());
    }

    #[test]
    fn test_winners_list() {
        assert_eq!(
            winners_list(&dataset()),
            vec![
                "Argentina", "Brazil", "England", "France", "Germany", "Italy", "Spain", "Uruguay"
            ]
        );
    }

    #[test]
    fn test_summary_serializes_with_status() {
        let json = serde_json::to_value(YearSummary::NoData { year: 1942 }).unwrap();
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["year"], 1942);

        let json = serde_json::to_value(year_summary(&dataset(), Some(1930))).unwrap();
        assert_eq!(json["status"], "match");
        assert_eq!(json["winner"], "Uruguay");
    }
}
