//! Match records for both competition phases.
//!
//! Group-stage [`Match`]es come from the persistent store; [`KnockoutMatch`]es
//! live in the local knockout log. Both expose the same scoreline through the
//! [`Fixture`] trait so the standings aggregation is shared.
//!
//! Goal counts are coerced on the way in: anything that is not a
//! non-negative number (missing, `null`, text, negative) reads as `0`, and
//! fractional values are truncated. Records written by older clients stored
//! goals as strings, which is why the coercion accepts numeric text.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::TeamId;

/// Common view over anything that carries a home/away scoreline.
pub trait Fixture {
    fn home_id(&self) -> &TeamId;
    fn away_id(&self) -> &TeamId;
    fn home_goals(&self) -> u32;
    fn away_goals(&self) -> u32;
}

/// Group-stage match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub home_id: TeamId,
    pub away_id: TeamId,
    #[serde(default, deserialize_with = "deserialize_goals")]
    #[schemars(with = "u32")]
    pub home_goals: u32,
    #[serde(default, deserialize_with = "deserialize_goals")]
    #[schemars(with = "u32")]
    pub away_goals: u32,
    /// Legacy scorer lists, carried through untouched.
    #[serde(default)]
    pub home_scorers: Vec<String>,
    #[serde(default)]
    pub away_scorers: Vec<String>,
}

/// Knockout-phase match. Same scoreline shape as [`Match`], no group and no
/// scorer lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnockoutMatch {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub home_id: TeamId,
    pub away_id: TeamId,
    #[serde(default, deserialize_with = "deserialize_goals")]
    #[schemars(with = "u32")]
    pub home_goals: u32,
    #[serde(default, deserialize_with = "deserialize_goals")]
    #[schemars(with = "u32")]
    pub away_goals: u32,
}

impl Fixture for Match {
    fn home_id(&self) -> &TeamId {
        &self.home_id
    }

    fn away_id(&self) -> &TeamId {
        &self.away_id
    }

    fn home_goals(&self) -> u32 {
        self.home_goals
    }

    fn away_goals(&self) -> u32 {
        self.away_goals
    }
}

impl Fixture for KnockoutMatch {
    fn home_id(&self) -> &TeamId {
        &self.home_id
    }

    fn away_id(&self) -> &TeamId {
        &self.away_id
    }

    fn home_goals(&self) -> u32 {
        self.home_goals
    }

    fn away_goals(&self) -> u32 {
        self.away_goals
    }
}

// ============================================
// Goal coercion
// ============================================

/// Coerce an arbitrary JSON value into a goal count.
pub fn coerce_goals(value: &Value) -> u32 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
            None => n.as_f64().map(goals_from_f64).unwrap_or(0),
        },
        Value::String(s) => s.trim().parse::<f64>().map(goals_from_f64).unwrap_or(0),
        _ => 0,
    }
}

/// Coerce free-text goal input (form fields, CLI arguments).
pub fn coerce_goals_str(input: &str) -> u32 {
    coerce_goals(&Value::String(input.to_string()))
}

fn goals_from_f64(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.trunc().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

fn deserialize_goals<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_goals).unwrap_or(0))
}
