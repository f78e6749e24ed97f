//! Canonical records the dashboard renders, independent of API field casing.

use serde::Serialize;

/// League summary as shown in the league list and landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct League {
    pub competition_key: i32,
    pub competition_name: String,
    pub teams_count: Option<i64>,
    pub players_count: Option<i64>,
    pub goals_per90: Option<f64>,
    pub tkl_plus_int_per90: Option<f64>,
    pub total_goals: Option<f64>,
    pub total_matches_played: Option<f64>,
}

/// Team entry of a league's team list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub team_key: i32,
    pub team_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayingTime {
    pub matches_played: Option<f64>,
    pub starts: Option<f64>,
    pub minutes: Option<f64>,
    pub nineties: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attacking {
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub goals_plus_assists: Option<f64>,
    pub non_penalty_goals: Option<f64>,
    pub shots: Option<f64>,
    pub shots_on_target: Option<f64>,
    pub shots_on_target_pct: Option<f64>,
    pub goals_per_shot: Option<f64>,
    pub goals_per_shot_on_target: Option<f64>,
}

/// Expected goals and shot/goal-creating actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Creativity {
    pub xg: Option<f64>,
    pub npxg: Option<f64>,
    pub xag: Option<f64>,
    pub xg_plus_xag: Option<f64>,
    pub xg_per_shot: Option<f64>,
    pub npxg_per_shot: Option<f64>,
    pub sca: Option<f64>,
    pub sca_per90: Option<f64>,
    pub gca: Option<f64>,
    pub gca_per90: Option<f64>,
}

/// Defensive actions and ball progression.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Defending {
    pub tackles: Option<f64>,
    pub tackles_won: Option<f64>,
    pub interceptions: Option<f64>,
    pub tackles_plus_interceptions: Option<f64>,
    pub tkl_plus_int_per90: Option<f64>,
    pub blocks: Option<f64>,
    pub clearances: Option<f64>,
    pub touches: Option<f64>,
    pub progressive_carries: Option<f64>,
    pub progressive_passes: Option<f64>,
    pub progressive_receptions: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Discipline {
    pub yellow_cards: Option<f64>,
    pub second_yellows: Option<f64>,
    pub red_cards: Option<f64>,
}

/// A player, either a squad list entry or a full profile.
///
/// Squad entries carry only a handful of statistics; the rest stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub player_key: i32,
    pub player_name: String,
    pub position: Option<String>,
    pub team_name: Option<String>,
    pub competition_name: Option<String>,
    pub age: Option<i64>,
    pub playing_time: PlayingTime,
    pub attacking: Attacking,
    pub creativity: Creativity,
    pub defending: Defending,
    pub discipline: Discipline,
}

/// One row of the goalkeeper leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goalkeeper {
    pub player_key: i32,
    pub player_name: String,
    pub team_name: Option<String>,
    pub matches_played: Option<f64>,
    pub minutes: Option<f64>,
    pub ga90: Option<f64>,
    pub save_pct: Option<f64>,
    pub psxg: Option<f64>,
    pub psxg_plus_minus_per90: Option<f64>,
}

/// Placeholder rendered for a missing statistic.
pub const NO_DATA: &str = "–";

/// Render a statistic with a fixed number of decimals, or [`NO_DATA`].
pub fn format_stat(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => NO_DATA.to_string(),
    }
}
