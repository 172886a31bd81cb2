use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque, stable team identifier assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TeamId(pub String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Group label. The persisted model accepts `A`..=`H`; which of them are in
/// play is decided by configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum GroupLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl GroupLabel {
    pub const ALL: [GroupLabel; 8] = [
        GroupLabel::A,
        GroupLabel::B,
        GroupLabel::C,
        GroupLabel::D,
        GroupLabel::E,
        GroupLabel::F,
        GroupLabel::G,
        GroupLabel::H,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLabel::A => "A",
            GroupLabel::B => "B",
            GroupLabel::C => "C",
            GroupLabel::D => "D",
            GroupLabel::E => "E",
            GroupLabel::F => "F",
            GroupLabel::G => "G",
            GroupLabel::H => "H",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GroupLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown group label '{trimmed}' (expected A-H)"))
    }
}

/// A registered team. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub group: GroupLabel,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>, group: GroupLabel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group,
        }
    }
}
