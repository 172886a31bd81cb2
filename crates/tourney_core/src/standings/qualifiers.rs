use super::group::GroupStandings;
use crate::models::{GroupLabel, Team};

/// Default number of teams that advance from each group.
pub const DEFAULT_QUALIFIERS_PER_GROUP: usize = 2;

/// Top `per_group` teams of every group, in group order then rank order.
///
/// Short groups contribute everything they have; groups missing from
/// `standings` contribute nothing.
pub fn select_qualifiers(
    standings: &GroupStandings,
    groups: &[GroupLabel],
    per_group: usize,
) -> Vec<Team> {
    groups
        .iter()
        .filter_map(|&label| standings.get(label))
        .flat_map(|rows| rows.iter().take(per_group))
        .filter_map(|row| row.team().team().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Match, TeamId};
    use crate::standings::GroupStandingsCalculator;
    use chrono::NaiveDate;

    fn win(home: &str, away: &str) -> Match {
        Match {
            id: format!("{home}-{away}"),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            notes: String::new(),
            home_id: TeamId::from(home),
            away_id: TeamId::from(away),
            home_goals: 1,
            away_goals: 0,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
        }
    }

    fn names(teams: &[Team]) -> Vec<&str> {
        teams.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_top_two_of_four() {
        let teams = vec![
            Team::new("t1", "T1", GroupLabel::A),
            Team::new("t2", "T2", GroupLabel::A),
            Team::new("t3", "T3", GroupLabel::A),
            Team::new("t4", "T4", GroupLabel::A),
        ];
        // T1 3 wins, T2 2 wins, T3 1 win, T4 none
        let matches = vec![
            win("t1", "t2"),
            win("t1", "t3"),
            win("t1", "t4"),
            win("t2", "t3"),
            win("t2", "t4"),
            win("t3", "t4"),
        ];
        let standings = GroupStandingsCalculator::compute(&teams, &matches, &[GroupLabel::A]);

        let q = select_qualifiers(&standings, &[GroupLabel::A], 2);
        assert_eq!(names(&q), vec!["T1", "T2"]);
    }

    #[test]
    fn test_short_group_emits_all() {
        let teams = vec![
            Team::new("a1", "Solo", GroupLabel::A),
            Team::new("b1", "B1", GroupLabel::B),
            Team::new("b2", "B2", GroupLabel::B),
            Team::new("b3", "B3", GroupLabel::B),
        ];
        let groups = [GroupLabel::A, GroupLabel::B];
        let standings = GroupStandingsCalculator::compute(&teams, &[win("b3", "b1")], &groups);

        let q = select_qualifiers(&standings, &groups, 2);
        assert_eq!(names(&q), vec!["Solo", "B3", "B2"]);

        let q = select_qualifiers(&standings, &groups, 3);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn test_group_order_follows_argument() {
        let teams = vec![
            Team::new("a1", "A1", GroupLabel::A),
            Team::new("b1", "B1", GroupLabel::B),
        ];
        let standings =
            GroupStandingsCalculator::compute(&teams, &[], &[GroupLabel::A, GroupLabel::B]);

        let q = select_qualifiers(&standings, &[GroupLabel::B, GroupLabel::A, GroupLabel::G], 1);
        assert_eq!(names(&q), vec!["B1", "A1"]);
        assert!(select_qualifiers(&standings, &[GroupLabel::A], 0).is_empty());
    }
}
