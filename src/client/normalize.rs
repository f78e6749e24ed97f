//! Single normalization pass from API rows to canonical records.
//!
//! The API may spell a column in PascalCase (`PlayerName`), camelCase
//! (`playerName`) or under an older name (`GplusA` for `G+A`). Each record
//! kind owns one alias table mapping a canonical field to its ordered aliases;
//! every alias is probed in both casings and the first non-null value wins.
//! Nothing downstream of this module branches on casing.

use serde_json::{Map, Value};

use super::records::{
    Attacking, Creativity, Defending, Discipline, Goalkeeper, League, Player, PlayingTime, Team,
};

/// Canonical field name → aliases, in probing order.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("{record} row is not a JSON object")]
    NotAnObject { record: &'static str },

    #[error("{record} row has no value for `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
}

/// A record kind that can be built from one API row.
pub trait Normalize: Sized {
    const RECORD: &'static str;
    const ALIASES: AliasTable;

    fn from_fields(fields: &Fields<'_>) -> Result<Self, NormalizeError>;
}

/// Alias-aware read access to one API row.
pub struct Fields<'a> {
    record: &'static str,
    aliases: AliasTable,
    row: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// First non-null value among the canonical field's aliases.
    pub fn value(&self, field: &'static str) -> Option<&'a Value> {
        let aliases = self
            .aliases
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, aliases)| *aliases)?;

        aliases.iter().find_map(|alias| {
            self.probe(alias)
                .or_else(|| casing_sibling(alias).and_then(|sibling| self.probe(&sibling)))
        })
    }

    fn probe(&self, key: &str) -> Option<&'a Value> {
        self.row.get(key).filter(|v| !v.is_null())
    }

    pub fn float(&self, field: &'static str) -> Option<f64> {
        self.value(field).and_then(as_f64)
    }

    pub fn int(&self, field: &'static str) -> Option<i64> {
        self.float(field)
            .filter(|v| v.fract() == 0.0 && v.is_finite())
            .map(|v| v as i64)
    }

    pub fn text(&self, field: &'static str) -> Option<String> {
        match self.value(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn require_key(&self, field: &'static str) -> Result<i32, NormalizeError> {
        self.int(field)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| self.missing(field))
    }

    pub fn require_text(&self, field: &'static str) -> Result<String, NormalizeError> {
        self.text(field).ok_or_else(|| self.missing(field))
    }

    fn missing(&self, field: &'static str) -> NormalizeError {
        NormalizeError::MissingField {
            record: self.record,
            field,
        }
    }
}

/// The same alias with the first letter's case flipped, if it is a letter.
fn casing_sibling(alias: &str) -> Option<String> {
    let mut chars = alias.chars();
    let first = chars.next()?;
    let flipped = if first.is_ascii_uppercase() {
        first.to_ascii_lowercase()
    } else if first.is_ascii_lowercase() {
        first.to_ascii_uppercase()
    } else {
        return None;
    };
    Some(std::iter::once(flipped).chain(chars).collect())
}

/// Numbers may arrive as JSON numbers or numeric strings (decimal columns).
fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Normalize one row into a canonical record.
pub fn normalize<T: Normalize>(row: &Value) -> Result<T, NormalizeError> {
    let row = row
        .as_object()
        .ok_or(NormalizeError::NotAnObject { record: T::RECORD })?;
    T::from_fields(&Fields {
        record: T::RECORD,
        aliases: T::ALIASES,
        row,
    })
}

/// Normalize every row of a list response; the first malformed row fails the list.
pub fn normalize_all<T: Normalize>(rows: &[Value]) -> Result<Vec<T>, NormalizeError> {
    rows.iter().map(normalize).collect()
}

pub fn leagues(rows: &[Value]) -> Result<Vec<League>, NormalizeError> {
    normalize_all(rows)
}

impl Normalize for League {
    const RECORD: &'static str = "league";
    const ALIASES: AliasTable = &[
        ("competition_key", &["CompetitionKey", "Id"]),
        ("competition_name", &["CompetitionName", "Name"]),
        ("teams_count", &["TeamsCount"]),
        ("players_count", &["PlayersCount"]),
        ("goals_per90", &["GoalsPer90_League", "GoalsPer90"]),
        ("tkl_plus_int_per90", &["TklPlusIntPer90_League", "TklPlusIntPer90"]),
        ("total_goals", &["TotalGoals"]),
        ("total_matches_played", &["TotalMatchesPlayed"]),
    ];

    fn from_fields(f: &Fields<'_>) -> Result<Self, NormalizeError> {
        Ok(League {
            competition_key: f.require_key("competition_key")?,
            competition_name: f.require_text("competition_name")?,
            teams_count: f.int("teams_count"),
            players_count: f.int("players_count"),
            goals_per90: f.float("goals_per90"),
            tkl_plus_int_per90: f.float("tkl_plus_int_per90"),
            total_goals: f.float("total_goals"),
            total_matches_played: f.float("total_matches_played"),
        })
    }
}

impl Normalize for Team {
    const RECORD: &'static str = "team";
    const ALIASES: AliasTable = &[
        ("team_key", &["TeamKey", "Id"]),
        ("team_name", &["TeamName", "Name"]),
    ];

    fn from_fields(f: &Fields<'_>) -> Result<Self, NormalizeError> {
        Ok(Team {
            team_key: f.require_key("team_key")?,
            team_name: f.require_text("team_name")?,
        })
    }
}

impl Normalize for Player {
    const RECORD: &'static str = "player";
    const ALIASES: AliasTable = &[
        ("player_key", &["PlayerKey", "Id"]),
        ("player_name", &["PlayerName", "Player", "Name"]),
        ("position", &["PositionCode", "Pos"]),
        ("team_name", &["TeamName", "Squad"]),
        ("competition_name", &["CompetitionName"]),
        ("age", &["Age"]),
        ("matches_played", &["MP", "mp"]),
        ("starts", &["Starts"]),
        ("minutes", &["Min", "Minutes"]),
        ("nineties", &["90s", "Nineties"]),
        ("goals", &["Gls"]),
        ("assists", &["Ast"]),
        ("goals_plus_assists", &["G+A", "GplusA", "GPlusA"]),
        ("non_penalty_goals", &["G-PK", "GminusPK"]),
        ("shots", &["Sh"]),
        ("shots_on_target", &["SoT"]),
        ("shots_on_target_pct", &["SoT%", "SoTPct"]),
        ("goals_per_shot", &["G/Sh", "GperSh"]),
        ("goals_per_shot_on_target", &["G/SoT", "GperSoT"]),
        ("xg", &["xG", "xg"]),
        ("npxg", &["npxG"]),
        ("xag", &["xAG", "xag"]),
        ("xg_plus_xag", &["xG+xAG", "xGplusxAG"]),
        ("xg_per_shot", &["xG/Sh"]),
        ("npxg_per_shot", &["npxG/Sh"]),
        ("sca", &["SCA"]),
        ("sca_per90", &["SCA90", "SCAper90", "SCAPer90"]),
        ("gca", &["GCA"]),
        ("gca_per90", &["GCA90", "GCAper90", "GCAPer90"]),
        ("tackles", &["Tkl"]),
        ("tackles_won", &["TklW"]),
        ("interceptions", &["Int"]),
        ("tackles_plus_interceptions", &["Tkl+Int", "TacklesPlusInt", "TklPlusInt"]),
        ("tkl_plus_int_per90", &["TklPlusIntPer90"]),
        ("blocks", &["Blocks"]),
        ("clearances", &["Clr"]),
        ("touches", &["Touches"]),
        ("progressive_carries", &["PrgC"]),
        ("progressive_passes", &["PrgP"]),
        ("progressive_receptions", &["PrgR"]),
        ("yellow_cards", &["CrdY"]),
        ("second_yellows", &["2CrdY"]),
        ("red_cards", &["CrdR"]),
    ];

    fn from_fields(f: &Fields<'_>) -> Result<Self, NormalizeError> {
        Ok(Player {
            player_key: f.require_key("player_key")?,
            player_name: f.require_text("player_name")?,
            position: f.text("position"),
            team_name: f.text("team_name"),
            competition_name: f.text("competition_name"),
            age: f.int("age"),
            playing_time: PlayingTime {
                matches_played: f.float("matches_played"),
                starts: f.float("starts"),
                minutes: f.float("minutes"),
                nineties: f.float("nineties"),
            },
            attacking: Attacking {
                goals: f.float("goals"),
                assists: f.float("assists"),
                goals_plus_assists: f.float("goals_plus_assists"),
                non_penalty_goals: f.float("non_penalty_goals"),
                shots: f.float("shots"),
                shots_on_target: f.float("shots_on_target"),
                shots_on_target_pct: f.float("shots_on_target_pct"),
                goals_per_shot: f.float("goals_per_shot"),
                goals_per_shot_on_target: f.float("goals_per_shot_on_target"),
            },
            creativity: Creativity {
                xg: f.float("xg"),
                npxg: f.float("npxg"),
                xag: f.float("xag"),
                xg_plus_xag: f.float("xg_plus_xag"),
                xg_per_shot: f.float("xg_per_shot"),
                npxg_per_shot: f.float("npxg_per_shot"),
                sca: f.float("sca"),
                sca_per90: f.float("sca_per90"),
                gca: f.float("gca"),
                gca_per90: f.float("gca_per90"),
            },
            defending: Defending {
                tackles: f.float("tackles"),
                tackles_won: f.float("tackles_won"),
                interceptions: f.float("interceptions"),
                tackles_plus_interceptions: f.float("tackles_plus_interceptions"),
                tkl_plus_int_per90: f.float("tkl_plus_int_per90"),
                blocks: f.float("blocks"),
                clearances: f.float("clearances"),
                touches: f.float("touches"),
                progressive_carries: f.float("progressive_carries"),
                progressive_passes: f.float("progressive_passes"),
                progressive_receptions: f.float("progressive_receptions"),
            },
            discipline: Discipline {
                yellow_cards: f.float("yellow_cards"),
                second_yellows: f.float("second_yellows"),
                red_cards: f.float("red_cards"),
            },
        })
    }
}

impl Normalize for Goalkeeper {
    const RECORD: &'static str = "goalkeeper";
    const ALIASES: AliasTable = &[
        ("player_key", &["PlayerKey", "Id"]),
        ("player_name", &["PlayerName", "Player", "Name"]),
        ("team_name", &["TeamName", "Squad"]),
        ("matches_played", &["MP", "mp"]),
        ("minutes", &["Min", "Minutes"]),
        ("ga90", &["GA90", "ga90"]),
        ("save_pct", &["SavePct", "SavePct90", "Save%"]),
        ("psxg", &["PSxG", "psxg"]),
        (
            "psxg_plus_minus_per90",
            &["PSxG_PlusMinus_per90", "PSxGPlusMinusPer90", "PSxGPlusMinus", "psxgPlusMinus"],
        ),
    ];

    fn from_fields(f: &Fields<'_>) -> Result<Self, NormalizeError> {
        Ok(Goalkeeper {
            player_key: f.require_key("player_key")?,
            player_name: f.require_text("player_name")?,
            team_name: f.text("team_name"),
            matches_played: f.float("matches_played"),
            minutes: f.float("minutes"),
            ga90: f.float("ga90"),
            save_pct: f.float("save_pct"),
            psxg: f.float("psxg"),
            psxg_plus_minus_per90: f.float("psxg_plus_minus_per90"),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pascal_and_camel_resolve_identically() {
        let pascal: Player = normalize(&json!({ "PlayerKey": 7, "PlayerName": "Bukayo Saka" })).unwrap();
        let camel: Player = normalize(&json!({ "playerKey": 7, "playerName": "Bukayo Saka" })).unwrap();
        assert_eq!(pascal, camel);
        assert_eq!(pascal.player_name, "Bukayo Saka");
    }

    #[test]
    fn first_defined_alias_wins() {
        let player: Player = normalize(&json!({
            "PlayerKey": 1,
            "PlayerName": "Rice",
            "GplusA": null,
            "GPlusA": 11,
            "SCAper90": 3.25
        }))
        .unwrap();
        assert_eq!(player.attacking.goals_plus_assists, Some(11.0));
        assert_eq!(player.creativity.sca_per90, Some(3.25));
    }

    #[test]
    fn symbol_columns_are_read_verbatim() {
        let player: Player = normalize(&json!({
            "PlayerKey": 120,
            "PlayerName": "Mohamed Salah",
            "G+A": 47,
            "90s": 37.5,
            "Tkl+Int": 23,
            "2CrdY": 0,
            "Min": 3371
        }))
        .unwrap();
        assert_eq!(player.attacking.goals_plus_assists, Some(47.0));
        assert_eq!(player.playing_time.nineties, Some(37.5));
        assert_eq!(player.playing_time.minutes, Some(3371.0));
        assert_eq!(player.defending.tackles_plus_interceptions, Some(23.0));
        assert_eq!(player.discipline.second_yellows, Some(0.0));
    }

    #[test]
    fn league_counts_accept_either_casing() {
        let rows = vec![
            json!({ "CompetitionKey": 1, "CompetitionName": "Premier League", "TeamsCount": 20, "totalGoals": 450 }),
            json!({ "competitionKey": 2, "competitionName": "La Liga", "teamsCount": 18, "TotalGoals": "300" }),
        ];
        let leagues = leagues(&rows).unwrap();
        assert_eq!(leagues[0].teams_count, Some(20));
        assert_eq!(leagues[1].teams_count, Some(18));
        assert_eq!(leagues[0].total_goals, Some(450.0));
        assert_eq!(leagues[1].total_goals, Some(300.0));
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = normalize::<Team>(&json!({ "TeamName": "Arsenal" })).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::MissingField {
                record: "team",
                field: "team_key"
            }
        );
    }

    #[test]
    fn non_object_row_is_rejected() {
        let err = normalize::<Goalkeeper>(&json!([1, 2])).unwrap_err();
        assert_eq!(err, NormalizeError::NotAnObject { record: "goalkeeper" });
    }

    #[test]
    fn goalkeeper_leaderboard_aliases() {
        let keeper: Goalkeeper = normalize(&json!({
            "PlayerKey": 121,
            "Player": "Alisson",
            "Squad": "Liverpool",
            "Min": 2520,
            "SavePct90": 73.5,
            "PSxGPlusMinus": 0.21
        }))
        .unwrap();
        assert_eq!(keeper.player_name, "Alisson");
        assert_eq!(keeper.team_name.as_deref(), Some("Liverpool"));
        assert_eq!(keeper.minutes, Some(2520.0));
        assert_eq!(keeper.save_pct, Some(73.5));
        assert_eq!(keeper.psxg_plus_minus_per90, Some(0.21));
    }

    #[test]
    fn goalkeeper_lowercase_aliases() {
        let keeper: Goalkeeper = normalize(&json!({
            "playerKey": 111,
            "player": "David Raya",
            "squad": "Arsenal",
            "mp": 38,
            "min": 3420,
            "ga90": 0.89,
            "savePct": 70.2,
            "psxg": 33.0,
            "psxgPlusMinus": -0.04
        }))
        .unwrap();
        assert_eq!(keeper.player_name, "David Raya");
        assert_eq!(keeper.team_name.as_deref(), Some("Arsenal"));
        assert_eq!(keeper.matches_played, Some(38.0));
        assert_eq!(keeper.minutes, Some(3420.0));
        assert_eq!(keeper.ga90, Some(0.89));
        assert_eq!(keeper.save_pct, Some(70.2));
        assert_eq!(keeper.psxg, Some(33.0));
        assert_eq!(keeper.psxg_plus_minus_per90, Some(-0.04));
    }

    #[test]
    fn squad_row_aliases() {
        let player: Player = normalize(&json!({
            "playerKey": 112,
            "Player": "Declan Rice",
            "pos": "MF",
            "mp": 35,
            "min": 3010,
            "xg": 3.6,
            "xag": 6.4
        }))
        .unwrap();
        assert_eq!(player.player_name, "Declan Rice");
        assert_eq!(player.position.as_deref(), Some("MF"));
        assert_eq!(player.playing_time.matches_played, Some(35.0));
        assert_eq!(player.playing_time.minutes, Some(3010.0));
        assert_eq!(player.creativity.xg, Some(3.6));
        assert_eq!(player.creativity.xag, Some(6.4));

        let by_name: Player = normalize(&json!({ "id": 7, "name": "Bukayo Saka", "Squad": "Arsenal" })).unwrap();
        assert_eq!(by_name.player_key, 7);
        assert_eq!(by_name.player_name, "Bukayo Saka");
        assert_eq!(by_name.team_name.as_deref(), Some("Arsenal"));
    }

    #[test]
    fn casing_sibling_flips_first_letter_only() {
        assert_eq!(casing_sibling("PlayerName").as_deref(), Some("playerName"));
        assert_eq!(casing_sibling("xG").as_deref(), Some("XG"));
        assert_eq!(casing_sibling("90s"), None);
    }
}
