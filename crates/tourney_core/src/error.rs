use thiserror::Error;

use crate::models::GroupLabel;

/// Rejections from the roster and result-entry rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Team name is required")]
    EmptyName,

    #[error("Team '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Group {group} is not part of this tournament")]
    UnknownGroup { group: GroupLabel },

    #[error("Group {group} already has the maximum of {capacity} teams")]
    GroupFull { group: GroupLabel, capacity: usize },

    #[error("Both home and away teams are required")]
    MissingTeam,

    #[error("A team cannot play against itself")]
    SelfMatch,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ApiError::Deserialization(err.to_string())
        } else {
            ApiError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
