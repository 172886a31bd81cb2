//! Memoised standings.
//!
//! The board keeps the last snapshot it was asked about together with the
//! computed standings. A different snapshot, or different parameters, always
//! triggers a full recomputation; there is no incremental update.

use fxhash::FxHasher;
use std::hash::{Hash, Hasher};

use super::{TournamentStandings, DEFAULT_QUALIFIERS_PER_GROUP};
use crate::models::{GroupLabel, KnockoutMatch, Match, Team};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    teams: Vec<Team>,
    matches: Vec<Match>,
    knockouts: Vec<KnockoutMatch>,
}

#[derive(Debug)]
struct Cached {
    fingerprint: u64,
    snapshot: Snapshot,
    standings: TournamentStandings,
}

impl Cached {
    fn is_for(
        &self,
        fingerprint: u64,
        teams: &[Team],
        matches: &[Match],
        knockouts: &[KnockoutMatch],
    ) -> bool {
        self.fingerprint == fingerprint
            && self.snapshot.teams == teams
            && self.snapshot.matches == matches
            && self.snapshot.knockouts == knockouts
    }
}

#[derive(Debug)]
pub struct StandingsBoard {
    groups: Vec<GroupLabel>,
    qualifiers_per_group: usize,
    cached: Option<Cached>,
    recomputations: u64,
}

impl StandingsBoard {
    pub fn new(groups: Vec<GroupLabel>, qualifiers_per_group: usize) -> Self {
        Self {
            groups,
            qualifiers_per_group,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn groups(&self) -> &[GroupLabel] {
        &self.groups
    }

    pub fn qualifiers_per_group(&self) -> usize {
        self.qualifiers_per_group
    }

    pub fn set_qualifiers_per_group(&mut self, per_group: usize) {
        if per_group != self.qualifiers_per_group {
            self.qualifiers_per_group = per_group;
            self.cached = None;
        }
    }

    pub fn set_groups(&mut self, groups: Vec<GroupLabel>) {
        if groups != self.groups {
            self.groups = groups;
            self.cached = None;
        }
    }

    /// Number of full recomputations performed so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Standings for the given snapshots, reusing the previous result when
    /// the snapshots are unchanged.
    pub fn standings(
        &mut self,
        teams: &[Team],
        matches: &[Match],
        knockouts: &[KnockoutMatch],
    ) -> &TournamentStandings {
        let fingerprint = fingerprint(teams, matches, knockouts);

        let cached = match self.cached.take() {
            Some(c) if c.is_for(fingerprint, teams, matches, knockouts) => c,
            _ => {
                log::debug!(
                    "recomputing standings: {} teams, {} matches, {} knockout matches",
                    teams.len(),
                    matches.len(),
                    knockouts.len()
                );
                self.recomputations += 1;
                Cached {
                    fingerprint,
                    snapshot: Snapshot {
                        teams: teams.to_vec(),
                        matches: matches.to_vec(),
                        knockouts: knockouts.to_vec(),
                    },
                    standings: TournamentStandings::compute(
                        teams,
                        matches,
                        knockouts,
                        &self.groups,
                        self.qualifiers_per_group,
                    ),
                }
            }
        };

        &self.cached.insert(cached).standings
    }
}

impl Default for StandingsBoard {
    fn default() -> Self {
        Self::new(
            vec![
                GroupLabel::A,
                GroupLabel::B,
                GroupLabel::C,
                GroupLabel::D,
                GroupLabel::E,
            ],
            DEFAULT_QUALIFIERS_PER_GROUP,
        )
    }
}

fn fingerprint(teams: &[Team], matches: &[Match], knockouts: &[KnockoutMatch]) -> u64 {
    let mut hasher = FxHasher::default();
    teams.hash(&mut hasher);
    matches.hash(&mut hasher);
    knockouts.hash(&mut hasher);
    hasher.finish()
}
