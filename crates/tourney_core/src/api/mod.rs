pub mod json_api;

pub use json_api::{
    compute_standings_json, compute_standings_json_with_config, request_schema_json,
    StandingsRequest, StandingsResponse,
};
