//! Landing page aggregation across all leagues.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::records::{League, NO_DATA};

/// Goals per match, or no data when no matches were played.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum GoalsPerMatch {
    Value(f64),
    NoData,
}

impl GoalsPerMatch {
    /// `goals / matches` rounded to two decimals; `NoData` for zero matches.
    pub fn compute(goals: f64, matches: f64) -> Self {
        if matches == 0.0 {
            return GoalsPerMatch::NoData;
        }
        let ratio = goals / matches;
        if ratio.is_finite() {
            GoalsPerMatch::Value((ratio * 100.0).round() / 100.0)
        } else {
            GoalsPerMatch::NoData
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            GoalsPerMatch::Value(v) => Some(v),
            GoalsPerMatch::NoData => None,
        }
    }
}

impl From<Option<f64>> for GoalsPerMatch {
    fn from(value: Option<f64>) -> Self {
        value.map_or(GoalsPerMatch::NoData, GoalsPerMatch::Value)
    }
}

impl From<GoalsPerMatch> for Option<f64> {
    fn from(value: GoalsPerMatch) -> Self {
        value.value()
    }
}

impl fmt::Display for GoalsPerMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalsPerMatch::Value(v) => write!(f, "{v:.2}"),
            GoalsPerMatch::NoData => f.write_str(NO_DATA),
        }
    }
}

/// Totals shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingSummary {
    pub total_leagues: usize,
    pub total_teams: i64,
    pub total_players: i64,
    pub total_goals: f64,
    pub total_matches: f64,
    pub goals_per_match: GoalsPerMatch,
}

impl LandingSummary {
    /// Sum the per-league counters; missing counters count as zero.
    pub fn from_leagues(leagues: &[League]) -> Self {
        let total_teams = leagues.iter().map(|l| l.teams_count.unwrap_or(0)).sum();
        let total_players = leagues.iter().map(|l| l.players_count.unwrap_or(0)).sum();
        let total_goals = leagues.iter().map(|l| l.total_goals.unwrap_or(0.0)).sum();
        let total_matches = leagues
            .iter()
            .map(|l| l.total_matches_played.unwrap_or(0.0))
            .sum();

        LandingSummary {
            total_leagues: leagues.len(),
            total_teams,
            total_players,
            total_goals,
            total_matches,
            goals_per_match: GoalsPerMatch::compute(total_goals, total_matches),
        }
    }
}
