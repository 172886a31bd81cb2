//! Teams and group-stage matches.
//!
//! Persisted as one JSON document. Teams are kept sorted by name; matches
//! keep their entry order. Removing a team removes every match it played.

use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use super::error::StoreError;
use super::io::{read_json, write_json_atomic};
use super::TOURNAMENT_FORMAT_VERSION;
use crate::config::TournamentConfig;
use crate::error::RosterError;
use crate::models::{GroupLabel, Match, Team, TeamId};
use crate::roster::{validate_new_match, validate_new_team, NewMatch};

#[derive(Debug, Serialize, Deserialize)]
struct TournamentFile {
    version: u32,
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentStore {
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`; a missing file gives an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let Some(file) = read_json::<TournamentFile>(path)? else {
            log::debug!("No tournament file at {:?}, starting empty", path);
            return Ok(Self::new());
        };

        if file.version != TOURNAMENT_FORMAT_VERSION {
            return Err(StoreError::VersionMismatch {
                found: file.version,
                expected: TOURNAMENT_FORMAT_VERSION,
            });
        }

        let mut teams = file.teams;
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self {
            teams,
            matches: file.matches,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let file = TournamentFile {
            version: TOURNAMENT_FORMAT_VERSION,
            teams: self.teams.clone(),
            matches: self.matches.clone(),
        };
        write_json_atomic(path, &file)
    }

    /// Teams sorted by name.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Group matches in entry order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn add_team(
        &mut self,
        name: &str,
        group: GroupLabel,
        config: &TournamentConfig,
    ) -> Result<Team, RosterError> {
        let name = validate_new_team(name, group, &self.teams, config)?;
        let team = Team::new(Uuid::new_v4().to_string(), name, group);

        let at = self.teams.partition_point(|t| t.name <= team.name);
        self.teams.insert(at, team.clone());

        log::debug!("Registered team {} ({}) in group {}", team.name, team.id, group);
        Ok(team)
    }

    /// Remove a team and every group match it appears in. Returns `false`
    /// when the id is unknown.
    pub fn remove_team(&mut self, id: &TeamId) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| &t.id != id);
        if self.teams.len() == before {
            return false;
        }

        let matches_before = self.matches.len();
        self.matches
            .retain(|m| &m.home_id != id && &m.away_id != id);

        log::info!(
            "Removed team {} and {} of its matches",
            id,
            matches_before - self.matches.len()
        );
        true
    }

    pub fn add_match(&mut self, new: NewMatch) -> Result<Match, RosterError> {
        validate_new_match(&new)?;

        let m = Match {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            notes: new.notes,
            home_id: new.home_id,
            away_id: new.away_id,
            home_goals: new.home_goals,
            away_goals: new.away_goals,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
        };
        self.matches.push(m.clone());
        Ok(m)
    }

    pub fn remove_match(&mut self, id: &str) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        self.matches.len() != before
    }
}
