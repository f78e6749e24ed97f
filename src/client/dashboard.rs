//! League → team → player drill-down state.
//!
//! Each selection resets everything downstream of it and hands out a
//! [`Ticket`]. A fetch result is applied only if its ticket is still the
//! current one for that level, so a slow response for an earlier selection
//! never overwrites a newer one.

use super::api::StatsSource;
use super::error::ClientError;
use super::panel::Panel;
use super::records::{Goalkeeper, League, Player, Team};

/// Rows shown in the goalkeeper leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

pub const LEAGUES_FAILED: &str = "Failed to load leagues.";
pub const TEAMS_FAILED: &str = "Failed to load teams.";
pub const GOALKEEPERS_FAILED: &str = "Failed to load goalkeepers.";
pub const PLAYERS_FAILED: &str = "Failed to load players.";
pub const PLAYER_FAILED: &str = "Failed to load player profile.";

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    NoLeagueSelected,
    LeagueSelected {
        league: League,
    },
    TeamSelected {
        league: League,
        team: Team,
    },
    PlayerSelected {
        league: League,
        team: Team,
        player: Player,
    },
}

impl Selection {
    pub fn league(&self) -> Option<&League> {
        match self {
            Selection::NoLeagueSelected => None,
            Selection::LeagueSelected { league }
            | Selection::TeamSelected { league, .. }
            | Selection::PlayerSelected { league, .. } => Some(league),
        }
    }

    pub fn team(&self) -> Option<&Team> {
        match self {
            Selection::TeamSelected { team, .. } | Selection::PlayerSelected { team, .. } => {
                Some(team)
            }
            _ => None,
        }
    }

    pub fn player(&self) -> Option<&Player> {
        match self {
            Selection::PlayerSelected { player, .. } => Some(player),
            _ => None,
        }
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Dashboard {
    selection: Selection,
    next_ticket: u64,
    leagues_ticket: Option<Ticket>,
    league_ticket: Option<Ticket>,
    team_ticket: Option<Ticket>,
    player_ticket: Option<Ticket>,
    leagues: Panel<Vec<League>>,
    teams: Panel<Vec<Team>>,
    goalkeepers: Panel<Vec<Goalkeeper>>,
    players: Panel<Vec<Player>>,
    player: Panel<Option<Player>>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            selection: Selection::NoLeagueSelected,
            next_ticket: 0,
            leagues_ticket: None,
            league_ticket: None,
            team_ticket: None,
            player_ticket: None,
            leagues: Panel::Idle,
            teams: Panel::Idle,
            goalkeepers: Panel::Idle,
            players: Panel::Idle,
            player: Panel::Idle,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn leagues(&self) -> &Panel<Vec<League>> {
        &self.leagues
    }

    pub fn teams(&self) -> &Panel<Vec<Team>> {
        &self.teams
    }

    pub fn goalkeepers(&self) -> &Panel<Vec<Goalkeeper>> {
        &self.goalkeepers
    }

    pub fn players(&self) -> &Panel<Vec<Player>> {
        &self.players
    }

    /// `Loaded(None)` means the player was not found: an empty detail panel.
    pub fn player(&self) -> &Panel<Option<Player>> {
        &self.player
    }

    /// Top of the goalkeeper leaderboard, in the order the API returned it.
    pub fn goalkeeper_leaderboard(&self) -> &[Goalkeeper] {
        match self.goalkeepers.data() {
            Some(rows) => &rows[..rows.len().min(LEADERBOARD_SIZE)],
            None => &[],
        }
    }

    fn issue(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    pub fn begin_load_leagues(&mut self) -> Ticket {
        let ticket = self.issue();
        self.leagues_ticket = Some(ticket);
        self.leagues = Panel::Loading;
        ticket
    }

    pub fn apply_leagues(&mut self, ticket: Ticket, result: Result<Vec<League>, ClientError>) -> bool {
        if self.leagues_ticket != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale leagues response");
            return false;
        }
        self.leagues = Panel::settle("leagues", result, LEAGUES_FAILED);
        true
    }

    /// Select a league, resetting team and player state.
    pub fn begin_select_league(&mut self, league: League) -> Ticket {
        let ticket = self.issue();
        self.selection = Selection::LeagueSelected { league };
        self.league_ticket = Some(ticket);
        self.team_ticket = None;
        self.player_ticket = None;
        self.teams = Panel::Loading;
        self.goalkeepers = Panel::Loading;
        self.players = Panel::Idle;
        self.player = Panel::Idle;
        ticket
    }

    pub fn apply_teams(&mut self, ticket: Ticket, result: Result<Vec<Team>, ClientError>) -> bool {
        if self.league_ticket != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale teams response");
            return false;
        }
        self.teams = Panel::settle("teams", result, TEAMS_FAILED);
        true
    }

    pub fn apply_goalkeepers(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Goalkeeper>, ClientError>,
    ) -> bool {
        if self.league_ticket != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale goalkeepers response");
            return false;
        }
        self.goalkeepers = Panel::settle("goalkeepers", result, GOALKEEPERS_FAILED);
        true
    }

    /// Select a team of the current league, resetting player state.
    ///
    /// Returns `None` when no league is selected.
    pub fn begin_select_team(&mut self, team: Team) -> Option<Ticket> {
        let league = self.selection.league()?.clone();
        let ticket = self.issue();
        self.selection = Selection::TeamSelected { league, team };
        self.team_ticket = Some(ticket);
        self.player_ticket = None;
        self.players = Panel::Loading;
        self.player = Panel::Idle;
        Some(ticket)
    }

    pub fn apply_players(&mut self, ticket: Ticket, result: Result<Vec<Player>, ClientError>) -> bool {
        if self.team_ticket != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale players response");
            return false;
        }
        self.players = Panel::settle("players", result, PLAYERS_FAILED);
        true
    }

    /// Select a player of the current team.
    ///
    /// Returns `None` when no team is selected.
    pub fn begin_select_player(&mut self, player: Player) -> Option<Ticket> {
        let league = self.selection.league()?.clone();
        let team = self.selection.team()?.clone();
        let ticket = self.issue();
        self.selection = Selection::PlayerSelected {
            league,
            team,
            player,
        };
        self.player_ticket = Some(ticket);
        self.player = Panel::Loading;
        Some(ticket)
    }

    pub fn apply_player(
        &mut self,
        ticket: Ticket,
        result: Result<Option<Player>, ClientError>,
    ) -> bool {
        if self.player_ticket != Some(ticket) {
            tracing::debug!(?ticket, "Discarding stale player response");
            return false;
        }
        self.player = Panel::settle("player", result, PLAYER_FAILED);
        true
    }

    pub async fn load_leagues<S: StatsSource>(&mut self, source: &S) {
        let ticket = self.begin_load_leagues();
        let result = source.leagues().await;
        self.apply_leagues(ticket, result);
    }

    /// Select a league and fetch its teams and goalkeepers concurrently.
    ///
    /// Both fetches settle before either panel is updated; a failure of one
    /// leaves the other's result intact.
    pub async fn select_league<S: StatsSource>(&mut self, source: &S, league: League) {
        let competition_key = league.competition_key;
        let ticket = self.begin_select_league(league);
        let (teams, goalkeepers) = tokio::join!(
            source.teams(competition_key),
            source.goalkeepers(competition_key)
        );
        self.apply_teams(ticket, teams);
        self.apply_goalkeepers(ticket, goalkeepers);
    }

    pub async fn select_team<S: StatsSource>(&mut self, source: &S, team: Team) {
        let team_key = team.team_key;
        let Some(ticket) = self.begin_select_team(team) else {
            tracing::warn!(team_key, "Team selected without a league");
            return;
        };
        let result = source.players(team_key).await;
        self.apply_players(ticket, result);
    }

    pub async fn select_player<S: StatsSource>(&mut self, source: &S, player: Player) {
        let player_key = player.player_key;
        let Some(ticket) = self.begin_select_player(player) else {
            tracing::warn!(player_key, "Player selected without a team");
            return;
        };
        let result = source.player(player_key).await;
        self.apply_player(ticket, result);
    }
}
