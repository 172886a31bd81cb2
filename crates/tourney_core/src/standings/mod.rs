//! Standings engine.
//!
//! Pure computations from roster and match snapshots to ranked tables:
//!
//! - [`GroupStandingsCalculator`]: one table per declared group
//! - [`select_qualifiers`]: top-N teams per group for the knockout phase
//! - [`KnockoutStandingsCalculator`]: one flat table over knockout matches
//!
//! None of these fail or mutate their inputs. Inconsistent records are
//! excluded (group stage) or shown with a placeholder (knockout phase).
//! [`StandingsBoard`] adds memoised recomputation on top.

pub mod board;
pub mod group;
pub mod knockout;
pub mod qualifiers;
pub mod row;

pub use board::StandingsBoard;
pub use group::{GroupStandings, GroupStandingsCalculator, GroupTable};
pub use knockout::{team_lookup, KnockoutStandingsCalculator};
pub use qualifiers::{select_qualifiers, DEFAULT_QUALIFIERS_PER_GROUP};
pub use row::{compare_rows, rank_rows, Entrant, StandingsRow, UNKNOWN_TEAM_NAME};

use serde::Serialize;

use crate::models::{GroupLabel, KnockoutMatch, Match, Team};

/// Everything the organizer screens show, computed from one set of snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentStandings {
    pub groups: GroupStandings,
    pub qualifiers: Vec<Team>,
    pub knockout: Vec<StandingsRow>,
}

impl TournamentStandings {
    pub fn compute(
        teams: &[Team],
        matches: &[Match],
        knockouts: &[KnockoutMatch],
        groups: &[GroupLabel],
        qualifiers_per_group: usize,
    ) -> Self {
        let group_standings = GroupStandingsCalculator::compute(teams, matches, groups);
        let qualifiers = select_qualifiers(&group_standings, groups, qualifiers_per_group);
        let knockout = KnockoutStandingsCalculator::compute(knockouts, &team_lookup(teams));

        Self {
            groups: group_standings,
            qualifiers,
            knockout,
        }
    }
}
