//! Knockout-phase results, kept locally next to the tournament file.
//!
//! Restoring is forgiving: a missing, unreadable or corrupt file yields an
//! empty log so the rest of the tournament can still be shown.

use std::io::ErrorKind;
use std::path::Path;
use uuid::Uuid;

use super::error::StoreError;
use super::io::{read_json, write_json_atomic};
use crate::error::RosterError;
use crate::models::{KnockoutMatch, TeamId};
use crate::roster::{validate_new_match, NewMatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnockoutLog {
    matches: Vec<KnockoutMatch>,
}

impl KnockoutLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: Vec<KnockoutMatch>) -> Self {
        Self { matches }
    }

    pub fn load(path: &Path) -> Self {
        match read_json::<Vec<KnockoutMatch>>(path) {
            Ok(Some(matches)) => Self { matches },
            Ok(None) => Self::new(),
            Err(e) => {
                log::warn!("Ignoring unreadable knockout log {:?}: {}", path, e);
                Self::new()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json_atomic(path, &self.matches)
    }

    /// Knockout matches in entry order.
    pub fn matches(&self) -> &[KnockoutMatch] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn add(&mut self, new: NewMatch) -> Result<KnockoutMatch, RosterError> {
        validate_new_match(&new)?;

        let m = KnockoutMatch {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            notes: new.notes,
            home_id: new.home_id,
            away_id: new.away_id,
            home_goals: new.home_goals,
            away_goals: new.away_goals,
        };
        self.matches.push(m.clone());
        Ok(m)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        self.matches.len() != before
    }

    /// Drop every match involving `team`. Returns how many were removed.
    pub fn remove_team(&mut self, team: &TeamId) -> usize {
        let before = self.matches.len();
        self.matches
            .retain(|m| &m.home_id != team && &m.away_id != team);
        before - self.matches.len()
    }

    /// Empty the log and delete its file.
    pub fn clear(&mut self, path: &Path) -> Result<(), StoreError> {
        self.matches.clear();
        match std::fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        log::info!("Cleared knockout log {:?}", path);
        Ok(())
    }
}
