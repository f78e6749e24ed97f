//! Team projection served by the league teams endpoint.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One distinct team of a league, as projected from `v_TeamSquad`.
///
/// Field names are kept exactly as the view spells them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamRef {
    #[serde(rename = "TeamKey")]
    #[sqlx(rename = "TeamKey")]
    pub team_key: i32,
    #[serde(rename = "TeamName")]
    #[sqlx(rename = "TeamName")]
    pub team_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_view_column_names() {
        let team = TeamRef {
            team_key: 11,
            team_name: "Arsenal".to_string(),
        };
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json, serde_json::json!({ "TeamKey": 11, "TeamName": "Arsenal" }));
    }
}
