//! Selection state
//!
//! The two user-chosen filters. Values are replaced, never edited in place.

use serde::{Deserialize, Serialize};

/// Currently chosen country and year; both optional and independent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Country picked in the country selector
    #[serde(default)]
    pub country: Option<String>,
    /// Year picked in the year selector
    #[serde(default)]
    pub year: Option<u16>,
}

impl SelectionState {
    pub fn new(country: Option<String>, year: Option<u16>) -> Self {
        Self { country, year }
    }

    /// New state with the country replaced; empty names count as cleared
    pub fn with_country(&self, country: Option<String>) -> Self {
        Self {
            country: country.filter(|c| !c.trim().is_empty()),
            year: self.year,
        }
    }

    /// New state with the year replaced
    pub fn with_year(&self, year: Option<u16>) -> Self {
        Self {
            country: self.country.clone(),
            year,
        }
    }

    /// New state with both selections cleared
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}
