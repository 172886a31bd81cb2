//! Single combined knockout-phase table.
//!
//! The roster is whatever the knockout matches reference. Ids the lookup
//! cannot resolve still get a row, shown under [`UNKNOWN_TEAM_NAME`].
//!
//! [`UNKNOWN_TEAM_NAME`]: super::row::UNKNOWN_TEAM_NAME

use std::collections::HashMap;

use super::row::{Entrant, StandingsRow, TableAccumulator};
use crate::models::{Fixture, KnockoutMatch, Team, TeamId};

/// Index a roster by id. Later duplicates win.
pub fn team_lookup(teams: &[Team]) -> HashMap<TeamId, Team> {
    teams.iter().map(|t| (t.id.clone(), t.clone())).collect()
}

pub struct KnockoutStandingsCalculator;

impl KnockoutStandingsCalculator {
    pub fn compute(
        matches: &[KnockoutMatch],
        team_lookup: &HashMap<TeamId, Team>,
    ) -> Vec<StandingsRow> {
        let mut table = TableAccumulator::new();

        for id in matches.iter().flat_map(|m| [m.home_id(), m.away_id()]) {
            if table.contains(id) {
                continue;
            }
            let entrant = match team_lookup.get(id) {
                Some(team) => Entrant::Registered(team.clone()),
                None => {
                    log::debug!("knockout table: team {} not in roster, using placeholder", id);
                    Entrant::Unknown { id: id.clone() }
                }
            };
            table.insert(entrant);
        }

        for m in matches {
            table.apply(m);
        }

        table.into_ranked()
    }
}
