//! Score text parsing
//!
//! Final scores are stored as display text such as `0–0 (a.e.t.) (3–2 p)`.
//! This module pulls the goals, extra-time marker and shoot-out result back
//! out of that text for the JSON API.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Structured form of a final score
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ScoreDetails {
    /// Goals scored by the winner (after extra time, if played)
    pub winner_goals: u8,
    /// Goals scored by the runner-up
    pub runner_up_goals: u8,
    /// Whether the final went to extra time
    pub extra_time: bool,
    /// Shoot-out result `(winner, runner_up)`, if decided on penalties
    pub penalties: Option<(u8, u8)>,
}

const SCORE_PATTERN: &str =
    r"^\s*(\d+)\s*[–-]\s*(\d+)(\s*\(a\.e\.t\.\))?(?:\s*\((\d+)\s*[–-]\s*(\d+)\s*p\))?\s*$";

fn score_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(SCORE_PATTERN) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(error = %e, "Score pattern failed to compile, details disabled");
            None
        }
    })
    .as_ref()
}

impl ScoreDetails {
    /// Parse score text; returns `None` if it doesn't follow the notation
    pub fn parse(text: &str) -> Option<Self> {
        let caps = score_regex()?.captures(text)?;

        let winner_goals = caps[1].parse().ok()?;
        let runner_up_goals = caps[2].parse().ok()?;
        let extra_time = caps.get(3).is_some();

        let penalties = match (caps.get(4), caps.get(5)) {
            (Some(w), Some(r)) => Some((w.as_str().parse().ok()?, r.as_str().parse().ok()?)),
            _ => None,
        };

        Some(Self {
            winner_goals,
            runner_up_goals,
            extra_time,
            penalties,
        })
    }

    /// Whether the final was level after play and settled by a shoot-out
    pub fn decided_on_penalties(&self) -> bool {
        self.penalties.is_some()
    }
}
