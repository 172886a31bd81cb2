//! Roster and result-entry rules.
//!
//! These checks sit in front of the stores. The standings engine never calls
//! them and copes with data that did not pass through here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TournamentConfig;
use crate::error::RosterError;
use crate::models::{GroupLabel, Team, TeamId};

/// Match details as entered by the organizer, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// Check a team registration and return the trimmed name to store.
pub fn validate_new_team(
    name: &str,
    group: GroupLabel,
    existing: &[Team],
    config: &TournamentConfig,
) -> Result<String, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }

    if !config.has_group(group) {
        return Err(RosterError::UnknownGroup { group });
    }

    let lowered = name.to_lowercase();
    if existing.iter().any(|t| t.name.to_lowercase() == lowered) {
        return Err(RosterError::DuplicateName {
            name: name.to_string(),
        });
    }

    if let Some(capacity) = config.capacity(group) {
        let count = existing.iter().filter(|t| t.group == group).count();
        if count >= capacity {
            return Err(RosterError::GroupFull { group, capacity });
        }
    }

    Ok(name.to_string())
}

pub fn validate_new_match(new: &NewMatch) -> Result<(), RosterError> {
    if new.home_id.is_empty() || new.away_id.is_empty() {
        return Err(RosterError::MissingTeam);
    }
    if new.home_id == new.away_id {
        return Err(RosterError::SelfMatch);
    }
    Ok(())
}
