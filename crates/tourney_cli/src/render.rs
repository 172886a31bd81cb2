//! Plain-text tables for the terminal.

use std::collections::HashMap;

use tourney_core::standings::team_lookup;
use tourney_core::{Fixture, StandingsRow, Team, TeamId, TournamentStandings};

const NAME_WIDTH: usize = 24;

pub fn render_table(title: &str, rows: &[StandingsRow]) -> String {
    let mut s = String::new();
    s.push_str(&format!("{title}\n"));
    s.push_str(&format!(
        "{:>3}  {:<w$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
        "Pos", "Team", "Pld", "W", "D", "L", "GF", "GA", "GD", "Pts",
        w = NAME_WIDTH
    ));

    if rows.is_empty() {
        s += "     (no teams)\n";
        return s;
    }

    for row in rows {
        s.push_str(&format!(
            "{:>3}  {:<w$} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
            row.rank(),
            truncate(row.team().name(), NAME_WIDTH),
            row.played(),
            row.wins(),
            row.draws(),
            row.losses(),
            row.goals_for(),
            row.goals_against(),
            format_goal_difference(row.goal_difference()),
            row.points(),
            w = NAME_WIDTH
        ));
    }
    s
}

pub fn render_standings(standings: &TournamentStandings) -> String {
    let mut s = String::new();
    for table in standings.groups.iter() {
        s += &render_table(&format!("Group {}", table.label), &table.rows);
        s.push('\n');
    }

    s += "Qualifiers\n";
    if standings.qualifiers.is_empty() {
        s += "  (none yet)\n";
    }
    for (i, team) in standings.qualifiers.iter().enumerate() {
        s.push_str(&format!("  {}. {} ({})\n", i + 1, team.name, team.group));
    }
    s.push('\n');

    s += &render_table("Knockout phase", &standings.knockout);
    s
}

/// One line per match, newest first.
pub fn render_matches<F>(
    matches: &[F],
    teams: &[Team],
    date_and_notes: impl Fn(&F) -> String,
) -> String
where
    F: Fixture,
{
    let lookup = team_lookup(teams);
    let mut s = String::new();
    if matches.is_empty() {
        s += "(no matches)\n";
        return s;
    }

    for m in matches.iter().rev() {
        s.push_str(&format!(
            "{}  {} {} - {} {}\n",
            date_and_notes(m),
            team_name(&lookup, m.home_id()),
            m.home_goals(),
            m.away_goals(),
            team_name(&lookup, m.away_id())
        ));
    }
    s
}

fn team_name<'a>(lookup: &'a HashMap<TeamId, Team>, id: &TeamId) -> &'a str {
    lookup.get(id).map(|t| t.name.as_str()).unwrap_or("?")
}

fn format_goal_difference(gd: i64) -> String {
    if gd > 0 {
        format!("+{gd}")
    } else {
        gd.to_string()
    }
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut out: String = name.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}
