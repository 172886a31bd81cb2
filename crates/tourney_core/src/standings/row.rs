//! Standings rows and the shared table accumulator.
//!
//! A [`StandingsRow`] is derived data: it is built from zero for every
//! computation and never persisted. Only [`StandingsRow::record`] mutates the
//! counters, so `gd == gf - ga`, `pld == w + d + l` and `pts == 3w + d` hold
//! after every update.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Fixture, Team, TeamId};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Display name used for teams referenced by a match but missing from the
/// roster.
pub const UNKNOWN_TEAM_NAME: &str = "(unknown team)";

/// The team a row belongs to.
///
/// Group tables only ever hold `Registered` entrants. Knockout tables may
/// also hold `Unknown` placeholders for ids the roster cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entrant {
    Registered(Team),
    Unknown { id: TeamId },
}

impl Entrant {
    pub fn id(&self) -> &TeamId {
        match self {
            Entrant::Registered(team) => &team.id,
            Entrant::Unknown { id } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entrant::Registered(team) => &team.name,
            Entrant::Unknown { .. } => UNKNOWN_TEAM_NAME,
        }
    }

    pub fn team(&self) -> Option<&Team> {
        match self {
            Entrant::Registered(team) => Some(team),
            Entrant::Unknown { .. } => None,
        }
    }
}

/// Aggregated record of one team within one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// 1-based position, assigned once the table is sorted.
    #[serde(rename = "pos")]
    rank: usize,
    team: Entrant,
    #[serde(rename = "pld")]
    played: u32,
    #[serde(rename = "w")]
    wins: u32,
    #[serde(rename = "d")]
    draws: u32,
    #[serde(rename = "l")]
    losses: u32,
    #[serde(rename = "gf")]
    goals_for: u64,
    #[serde(rename = "ga")]
    goals_against: u64,
    #[serde(rename = "gd")]
    goal_difference: i64,
    #[serde(rename = "pts")]
    points: u32,
}

impl StandingsRow {
    pub fn new(team: Entrant) -> Self {
        Self {
            rank: 0,
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Record one result from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(u64::from(scored));
        self.goals_against = self.goals_against.saturating_add(u64::from(conceded));
        self.goal_difference = signed(self.goals_for) - signed(self.goals_against);

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins = self.wins.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_FOR_WIN);
            }
            Ordering::Less => {
                self.losses = self.losses.saturating_add(1);
            }
            Ordering::Equal => {
                self.draws = self.draws.saturating_add(1);
                self.points = self.points.saturating_add(POINTS_FOR_DRAW);
            }
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn team(&self) -> &Entrant {
        &self.team
    }

    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn goals_for(&self) -> u64 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u64 {
        self.goals_against
    }

    pub fn goal_difference(&self) -> i64 {
        self.goal_difference
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

// Goal totals are sums of u32 counts, far below i64::MAX in practice.
fn signed(goals: u64) -> i64 {
    i64::try_from(goals).unwrap_or(i64::MAX)
}

/// Table order: points desc, goal difference desc, goals for desc, then
/// team name ascending (byte-wise, case-sensitive).
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.name().cmp(b.team.name()))
}

/// Sort rows and hand out consecutive 1-based ranks. Rows equal on every
/// criterion keep their insertion order and still get distinct ranks.
pub fn rank_rows(mut rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
    rows.sort_by(compare_rows);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Zero-initialised rows keyed by team id, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct TableAccumulator {
    rows: Vec<StandingsRow>,
    index: HashMap<TeamId, usize>,
}

impl TableAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a zero row. A second entrant with an id already present is ignored.
    pub(crate) fn insert(&mut self, entrant: Entrant) {
        if self.index.contains_key(entrant.id()) {
            return;
        }
        self.index.insert(entrant.id().clone(), self.rows.len());
        self.rows.push(StandingsRow::new(entrant));
    }

    pub(crate) fn contains(&self, id: &TeamId) -> bool {
        self.index.contains_key(id)
    }

    /// Apply a fixture to both sides. Returns `false` (and touches nothing)
    /// if either side has no row.
    pub(crate) fn apply<F: Fixture>(&mut self, fixture: &F) -> bool {
        let (Some(&home), Some(&away)) = (
            self.index.get(fixture.home_id()),
            self.index.get(fixture.away_id()),
        ) else {
            return false;
        };

        let hg = fixture.home_goals();
        let ag = fixture.away_goals();
        self.rows[home].record(hg, ag);
        self.rows[away].record(ag, hg);
        true
    }

    pub(crate) fn into_ranked(self) -> Vec<StandingsRow> {
        rank_rows(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupLabel;

    fn entrant(id: &str, name: &str) -> Entrant {
        Entrant::Registered(Team::new(id, name, GroupLabel::A))
    }

    fn row_with(name: &str, results: &[(u32, u32)]) -> StandingsRow {
        let mut row = StandingsRow::new(entrant(name, name));
        for &(scored, conceded) in results {
            row.record(scored, conceded);
        }
        row
    }

    fn assert_invariants(row: &StandingsRow) {
        assert_eq!(
            row.goal_difference(),
            row.goals_for() as i64 - row.goals_against() as i64
        );
        assert_eq!(row.played(), row.wins() + row.draws() + row.losses());
        assert_eq!(row.points(), 3 * row.wins() + row.draws());
    }

    #[test]
    fn test_record_win_loss_draw() {
        let mut row = StandingsRow::new(entrant("t1", "T1"));
        row.record(3, 1);
        assert_eq!((row.played(), row.wins(), row.points()), (1, 1, 3));
        assert_eq!(row.goal_difference(), 2);

        row.record(0, 2);
        assert_eq!((row.played(), row.losses(), row.points()), (2, 1, 3));
        assert_eq!(row.goal_difference(), 0);

        row.record(2, 2);
        assert_eq!((row.played(), row.draws(), row.points()), (3, 1, 4));
        assert_eq!((row.goals_for(), row.goals_against()), (5, 5));
        assert_invariants(&row);
    }

    #[test]
    fn test_huge_goal_counts_do_not_overflow() {
        let mut row = StandingsRow::new(entrant("t1", "T1"));
        row.record(u32::MAX, 0);
        row.record(u32::MAX, 1);
        row.record(0, u32::MAX);

        assert_eq!(row.goals_for(), 2 * u64::from(u32::MAX));
        assert_eq!(row.goals_against(), u64::from(u32::MAX) + 1);
        assert_eq!(row.points(), 6);
        assert_invariants(&row);
    }

    #[test]
    fn test_goal_difference_goes_negative() {
        let row = row_with("T2", &[(1, 3), (0, 4)]);
        assert_eq!(row.goal_difference(), -6);
        assert_invariants(&row);
    }

    #[test]
    fn test_rank_by_goal_difference_when_points_tie() {
        // Points [6, 6, 3], goal differences [2, 5, 0]
        let a = row_with("A", &[(3, 2), (2, 1)]);
        let b = row_with("B", &[(4, 0), (2, 1)]);
        let c = row_with("C", &[(1, 1), (0, 0), (2, 2)]);
        assert_eq!((a.points(), b.points(), c.points()), (6, 6, 3));
        assert_eq!((a.goal_difference(), b.goal_difference()), (2, 5));

        let ranked = rank_rows(vec![a, b, c]);
        let names: Vec<&str> = ranked.iter().map(|r| r.team().name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_goals_for_breaks_goal_difference_tie() {
        let low = row_with("Low", &[(1, 0)]);
        let high = row_with("High", &[(3, 2)]);
        let ranked = rank_rows(vec![low, high]);
        assert_eq!(ranked[0].team().name(), "High");
    }

    #[test]
    fn test_name_tiebreak_is_ascending_and_case_sensitive() {
        let ranked = rank_rows(vec![row_with("Beta", &[]), row_with("Alpha", &[])]);
        assert_eq!(ranked[0].team().name(), "Alpha");
        assert_eq!(ranked[1].team().name(), "Beta");

        // Uppercase sorts before lowercase byte-wise
        let ranked = rank_rows(vec![row_with("alpha", &[]), row_with("Zulu", &[])]);
        assert_eq!(ranked[0].team().name(), "Zulu");
    }

    #[test]
    fn test_full_ties_get_distinct_consecutive_ranks() {
        let rows = vec![
            StandingsRow::new(entrant("x", "Same")),
            StandingsRow::new(entrant("y", "Same")),
        ];
        let ranked = rank_rows(rows);
        assert_eq!(ranked[0].rank(), 1);
        assert_eq!(ranked[1].rank(), 2);
        assert_eq!(ranked[0].team().id().as_str(), "x");
    }

    #[test]
    fn test_accumulator_ignores_duplicate_entrants() {
        let mut acc = TableAccumulator::new();
        acc.insert(entrant("t1", "First"));
        acc.insert(entrant("t1", "Second"));
        let rows = acc.into_ranked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team().name(), "First");
    }

    #[test]
    fn test_row_wire_shape() {
        let row = row_with("T1", &[(3, 1)]);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["pld"], 1);
        assert_eq!(json["gd"], 2);
        assert_eq!(json["pts"], 3);
        assert_eq!(json["team"]["kind"], "registered");
        assert_eq!(json["team"]["name"], "T1");

        let unknown = StandingsRow::new(Entrant::Unknown { id: TeamId::from("ghost") });
        let json = serde_json::to_value(&unknown).unwrap();
        assert_eq!(json["team"]["kind"], "unknown");
        assert_eq!(json["team"]["id"], "ghost");
    }
}
