//! Group-stage tables.
//!
//! Every team of a declared group gets a row, played or not. A match only
//! counts when both teams are known, share a group, and that group is one of
//! the declared labels; anything else is dropped whole, never half-applied.

use serde::Serialize;
use std::collections::HashMap;

use super::row::{Entrant, StandingsRow, TableAccumulator};
use crate::models::{Fixture, GroupLabel, Match, Team, TeamId};

/// Ranked table of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTable {
    pub label: GroupLabel,
    pub rows: Vec<StandingsRow>,
}

/// One table per declared group, in the caller's group order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupStandings {
    tables: Vec<GroupTable>,
}

impl GroupStandings {
    /// Rows of `label`, or `None` if the group was not declared.
    pub fn get(&self, label: GroupLabel) -> Option<&[StandingsRow]> {
        self.tables
            .iter()
            .find(|table| table.label == label)
            .map(|table| table.rows.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupTable> {
        self.tables.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = GroupLabel> + '_ {
        self.tables.iter().map(|table| table.label)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

pub struct GroupStandingsCalculator;

impl GroupStandingsCalculator {
    /// Build ranked tables for `groups` from the team roster and group matches.
    ///
    /// Duplicate labels in `groups` are collapsed onto their first position.
    pub fn compute(teams: &[Team], matches: &[Match], groups: &[GroupLabel]) -> GroupStandings {
        let mut order: Vec<GroupLabel> = Vec::with_capacity(groups.len());
        for &label in groups {
            if !order.contains(&label) {
                order.push(label);
            }
        }

        let mut tables: HashMap<GroupLabel, TableAccumulator> = order
            .iter()
            .map(|&label| {
                let mut acc = TableAccumulator::new();
                for team in teams.iter().filter(|t| t.group == label) {
                    acc.insert(Entrant::Registered(team.clone()));
                }
                (label, acc)
            })
            .collect();

        let group_of: HashMap<&TeamId, GroupLabel> =
            teams.iter().map(|t| (&t.id, t.group)).collect();

        for m in matches {
            let (Some(&home_group), Some(&away_group)) =
                (group_of.get(m.home_id()), group_of.get(m.away_id()))
            else {
                log::trace!(
                    "excluding match {}: unknown team ({} vs {})",
                    m.id,
                    m.home_id,
                    m.away_id
                );
                continue;
            };

            if home_group != away_group {
                log::trace!(
                    "excluding match {}: cross-group fixture ({} vs {})",
                    m.id,
                    home_group,
                    away_group
                );
                continue;
            }

            let Some(table) = tables.get_mut(&home_group) else {
                log::trace!("excluding match {}: group {} not declared", m.id, home_group);
                continue;
            };

            if !table.apply(m) {
                log::trace!("excluding match {}: team missing from group {}", m.id, home_group);
            }
        }

        let tables = order
            .into_iter()
            .map(|label| GroupTable {
                label,
                rows: tables.remove(&label).unwrap_or_default().into_ranked(),
            })
            .collect();

        GroupStandings { tables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn team(id: &str, name: &str, group: GroupLabel) -> Team {
        Team::new(id, name, group)
    }

    fn fixture(home: &str, away: &str, hg: u32, ag: u32) -> Match {
        Match {
            id: format!("{home}-{away}"),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            notes: String::new(),
            home_id: TeamId::from(home),
            away_id: TeamId::from(away),
            home_goals: hg,
            away_goals: ag,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
        }
    }

    fn row<'a>(rows: &'a [StandingsRow], id: &str) -> &'a StandingsRow {
        rows.iter().find(|r| r.team().id().as_str() == id).unwrap()
    }

    #[test]
    fn test_single_win() {
        let teams = vec![
            team("t1", "T1", GroupLabel::A),
            team("t2", "T2", GroupLabel::A),
        ];
        let standings = GroupStandingsCalculator::compute(
            &teams,
            &[fixture("t1", "t2", 3, 1)],
            &[GroupLabel::A],
        );
        let rows = standings.get(GroupLabel::A).unwrap();

        let t1 = row(rows, "t1");
        assert_eq!(
            (t1.played(), t1.wins(), t1.draws(), t1.losses()),
            (1, 1, 0, 0)
        );
        assert_eq!(
            (t1.goals_for(), t1.goals_against(), t1.goal_difference(), t1.points()),
            (3, 1, 2, 3)
        );

        let t2 = row(rows, "t2");
        assert_eq!(
            (t2.played(), t2.wins(), t2.draws(), t2.losses()),
            (1, 0, 0, 1)
        );
        assert_eq!(
            (t2.goals_for(), t2.goals_against(), t2.goal_difference(), t2.points()),
            (1, 3, -2, 0)
        );
        assert_eq!(rows[0].team().id().as_str(), "t1");
    }

    #[test]
    fn test_draw() {
        let teams = vec![
            team("t1", "T1", GroupLabel::B),
            team("t2", "T2", GroupLabel::B),
        ];
        let standings = GroupStandingsCalculator::compute(
            &teams,
            &[fixture("t1", "t2", 2, 2)],
            &[GroupLabel::B],
        );
        for r in standings.get(GroupLabel::B).unwrap() {
            assert_eq!((r.played(), r.draws(), r.points(), r.goal_difference()), (1, 1, 1, 0));
        }
    }

    #[test]
    fn test_teams_without_matches_still_listed() {
        let teams = vec![
            team("t1", "Zeta", GroupLabel::A),
            team("t2", "Alpha", GroupLabel::A),
            team("t3", "Gamma", GroupLabel::C),
        ];
        let standings =
            GroupStandingsCalculator::compute(&teams, &[], &[GroupLabel::A, GroupLabel::C]);

        let a = standings.get(GroupLabel::A).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].team().name(), "Alpha");
        assert!(a.iter().all(|r| r.played() == 0 && r.points() == 0));
        assert_eq!(standings.get(GroupLabel::C).unwrap().len(), 1);
    }

    #[test]
    fn test_cross_group_match_excluded() {
        let teams = vec![
            team("a1", "A1", GroupLabel::A),
            team("b1", "B1", GroupLabel::B),
        ];
        let standings = GroupStandingsCalculator::compute(
            &teams,
            &[fixture("a1", "b1", 5, 0)],
            &[GroupLabel::A, GroupLabel::B],
        );
        assert!(standings.iter().flat_map(|t| t.rows.iter()).all(|r| r.played() == 0));
    }

    #[test]
    fn test_unknown_team_match_excluded_entirely() {
        let teams = vec![team("a1", "A1", GroupLabel::A)];
        let standings = GroupStandingsCalculator::compute(
            &teams,
            &[fixture("a1", "ghost", 2, 0), fixture("ghost", "a1", 0, 1)],
            &[GroupLabel::A],
        );
        let a1 = row(standings.get(GroupLabel::A).unwrap(), "a1");
        assert_eq!(a1.played(), 0);
        assert_eq!(a1.goals_for(), 0);
    }

    #[test]
    fn test_undeclared_group_has_no_table() {
        let teams = vec![
            team("h1", "H1", GroupLabel::H),
            team("h2", "H2", GroupLabel::H),
        ];
        let standings = GroupStandingsCalculator::compute(
            &teams,
            &[fixture("h1", "h2", 1, 0)],
            &[GroupLabel::A],
        );
        assert!(standings.get(GroupLabel::H).is_none());
        assert_eq!(standings.get(GroupLabel::A).unwrap().len(), 0);
    }

    #[test]
    fn test_group_order_follows_caller_and_dedupes() {
        let standings = GroupStandingsCalculator::compute(
            &[],
            &[],
            &[GroupLabel::C, GroupLabel::A, GroupLabel::C],
        );
        let labels: Vec<GroupLabel> = standings.labels().collect();
        assert_eq!(labels, vec![GroupLabel::C, GroupLabel::A]);
    }

    #[test]
    fn test_ranking_over_round_robin() {
        let teams = vec![
            team("t1", "Alpha", GroupLabel::A),
            team("t2", "Beta", GroupLabel::A),
            team("t3", "Gamma", GroupLabel::A),
            team("t4", "Delta", GroupLabel::A),
        ];
        let matches = vec![
            fixture("t1", "t2", 1, 0),
            fixture("t3", "t4", 4, 0),
            fixture("t1", "t3", 0, 0),
            fixture("t2", "t4", 2, 1),
            fixture("t1", "t4", 2, 0),
            fixture("t2", "t3", 1, 1),
        ];
        let standings = GroupStandingsCalculator::compute(&teams, &matches, &[GroupLabel::A]);
        let rows = standings.get(GroupLabel::A).unwrap();

        // Gamma: 5 pts gd +4, Alpha: 7 pts gd +3, Beta: 4 pts, Delta: 0
        let order: Vec<&str> = rows.iter().map(|r| r.team().name()).collect();
        assert_eq!(order, vec!["Alpha", "Gamma", "Beta", "Delta"]);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        for r in rows {
            assert_eq!(r.played(), 3);
            assert_eq!(r.points(), 3 * r.wins() + r.draws());
        }
    }

    #[test]
    fn test_determinism_and_inputs_untouched() {
        let teams = vec![
            team("t1", "T1", GroupLabel::A),
            team("t2", "T2", GroupLabel::A),
        ];
        let matches = vec![fixture("t1", "t2", 1, 1), fixture("t2", "t1", 3, 0)];
        let teams_before = teams.clone();
        let matches_before = matches.clone();

        let first = GroupStandingsCalculator::compute(&teams, &matches, &[GroupLabel::A]);
        let second = GroupStandingsCalculator::compute(&teams, &matches, &[GroupLabel::A]);

        assert_eq!(first, second);
        assert_eq!(teams, teams_before);
        assert_eq!(matches, matches_before);
    }
}
