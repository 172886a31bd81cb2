//! # tourney_core - Group Stage and Knockout Standings
//!
//! Ranked tables for a tournament played as groups followed by a knockout
//! phase, plus the roster rules and file stores an organizer tool needs.
//!
//! ## Features
//! - Deterministic group tables (points, goal difference, goals for, name)
//! - Qualifier selection (top N per group)
//! - Combined knockout table over an inferred roster
//! - Memoised recomputation via [`StandingsBoard`]
//! - JSON API and JSON file persistence

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;
pub mod standings;
pub mod store;

pub use api::{compute_standings_json, request_schema_json, StandingsRequest, StandingsResponse};
pub use config::{default_config, TournamentConfig};
pub use error::{ApiError, ConfigError, Result, RosterError};
pub use models::{Fixture, GroupLabel, KnockoutMatch, Match, Team, TeamId};
pub use roster::NewMatch;
pub use standings::{
    select_qualifiers, Entrant, GroupStandings, GroupStandingsCalculator, GroupTable,
    KnockoutStandingsCalculator, StandingsBoard, StandingsRow, TournamentStandings,
};
pub use store::{DataDir, KnockoutLog, StoreError, TournamentStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
