pub mod fixture;
pub mod team;

pub use fixture::{coerce_goals, coerce_goals_str, Fixture, KnockoutMatch, Match};
pub use team::{GroupLabel, Team, TeamId};
