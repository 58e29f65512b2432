//! Built-in tables
//!
//! Finals from 1930 to 2022 and the title count of every country that has won.

use super::error::DataResult;
use super::types::{CountryStanding, Dataset, MatchResult};

const FINALS: [(u16, &str, &str, &str); 22] = [
    (1930, "Uruguay", "Argentina", "4–2"),
    (1934, "Italy", "Czechoslovakia", "2–1 (a.e.t.)"),
    (1938, "Italy", "Hungary", "4–2"),
    (1950, "Uruguay", "Brazil", "2–1"),
    (1954, "Germany", "Hungary", "3–2"),
    (1958, "Brazil", "Sweden", "5–2"),
    (1962, "Brazil", "Czechoslovakia", "3–1"),
    (1966, "England", "Germany", "4–2 (a.e.t.)"),
    (1970, "Brazil", "Italy", "4–1"),
    (1974, "Germany", "Netherlands", "2–1"),
    (1978, "Argentina", "Netherlands", "3–1 (a.e.t.)"),
    (1982, "Italy", "Germany", "3–1"),
    (1986, "Argentina", "Germany", "3–2 (a.e.t.)"),
    (1990, "Germany", "Argentina", "1–0"),
    (1994, "Brazil", "Italy", "0–0 (a.e.t.) (3–2 p)"),
    (1998, "France", "Brazil", "3–0"),
    (2002, "Brazil", "Germany", "2–0"),
    (2006, "Italy", "France", "1–1 (a.e.t.) (5–3 p)"),
    (2010, "Spain", "Netherlands", "1–0 (a.e.t.)"),
    (2014, "Germany", "Argentina", "1–0 (a.e.t.)"),
    (2018, "France", "Croatia", "4–2"),
    (2022, "Argentina", "France", "3–3 (a.e.t.) (4–2 p)"),
];

// country, ISO, wins, lat, lon
const STANDINGS: [(&str, &str, u32, f64, f64); 8] = [
    ("Brazil", "BRA", 5, -14.235, -51.9253),
    ("Germany", "DEU", 4, 51.1657, 10.4515),
    ("Italy", "ITA", 4, 41.8719, 12.5674),
    ("Argentina", "ARG", 3, -38.4161, -63.6167),
    ("France", "FRA", 2, 46.2276, 2.2137),
    ("Uruguay", "URY", 2, -32.5228, -55.7658),
    ("England", "GBR", 1, 52.3555, -1.1743),
    ("Spain", "ESP", 1, 40.4637, -3.7492),
];

impl Dataset {
    /// The built-in World Cup history tables
    pub fn builtin() -> DataResult<Self> {
        let matches = FINALS
            .iter()
            .map(|&(year, winner, runner_up, score)| {
                MatchResult::new(year, winner, runner_up, score)
            })
            .collect();

        let standings = STANDINGS
            .iter()
            .map(|&(country, iso, wins, lat, lon)| CountryStanding::new(country, iso, wins, lat, lon))
            .collect();

        Dataset::new(matches, standings)
    }
}
