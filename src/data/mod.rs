use std::collections::HashMap;

use crate::models::{League, Player, Position, Team};

mod seed;

/// Read-only reference datasets.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it after
/// construction, so handlers only ever borrow from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    leagues: Vec<League>,
    teams_by_league: HashMap<i64, Vec<Team>>,
    players_by_team: HashMap<i64, Vec<Player>>,
    positions: Vec<Position>,
}

impl Catalog {
    /// Catalog populated with the fixed reference data.
    pub fn seeded() -> Self {
        Self {
            leagues: seed::leagues(),
            teams_by_league: seed::teams_by_league(),
            players_by_team: seed::players_by_team(),
            positions: seed::positions(),
        }
    }

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    // Unknown league ids yield an empty slice, not an error
    pub fn teams_for_league(&self, league_id: i64) -> &[Team] {
        self.teams_by_league
            .get(&league_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn players_for_team(&self, team_id: i64) -> &[Player] {
        self.players_by_team
            .get(&team_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn team_count(&self) -> usize {
        self.teams_by_league.values().map(Vec::len).sum()
    }

    pub fn player_count(&self) -> usize {
        self.players_by_team.values().map(Vec::len).sum()
    }
}
