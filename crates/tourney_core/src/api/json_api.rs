use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{default_config, TournamentConfig};
use crate::error::{ApiError, Result};
use crate::models::{GroupLabel, KnockoutMatch, Match, Team};
use crate::standings::TournamentStandings;
use crate::SCHEMA_VERSION;

/// Snapshots plus optional overrides of the configured layout.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub knockouts: Vec<KnockoutMatch>,
    /// Group order; the configured groups when omitted
    #[serde(default)]
    pub groups: Option<Vec<GroupLabel>>,
    /// Teams advancing per group; the configured count when omitted
    #[serde(default)]
    pub qualifiers_per_group: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub standings: TournamentStandings,
}

/// Compute standings from a JSON request, using the embedded default config
/// for anything the request leaves out.
pub fn compute_standings_json(request_json: &str) -> Result<String> {
    compute_standings_json_with_config(request_json, default_config())
}

pub fn compute_standings_json_with_config(
    request_json: &str,
    config: &TournamentConfig,
) -> Result<String> {
    let request: StandingsRequest = serde_json::from_str(request_json)?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(ApiError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let groups = request.groups.unwrap_or_else(|| config.groups.clone());
    let per_group = request
        .qualifiers_per_group
        .unwrap_or(config.qualifiers_per_group);

    let standings = TournamentStandings::compute(
        &request.teams,
        &request.matches,
        &request.knockouts,
        &groups,
        per_group,
    );

    let response = StandingsResponse {
        schema_version: SCHEMA_VERSION,
        standings,
    };
    Ok(serde_json::to_string(&response)?)
}

/// JSON Schema of [`StandingsRequest`].
pub fn request_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(StandingsRequest);
    Ok(serde_json::to_string_pretty(&schema)?)
}
