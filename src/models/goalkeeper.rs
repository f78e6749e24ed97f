//! Query parameters for the goalkeeper leaderboard.

use serde::Deserialize;

/// `?competitionId=N` on `GET /api/goalkeepers`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalkeeperFilter {
    #[serde(rename = "competitionId")]
    pub competition_id: i32,
}
