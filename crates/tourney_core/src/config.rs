//! Tournament configuration.
//!
//! Which groups are in play, how many teams advance from each, and how many
//! teams a group may hold. Defaults are embedded at compile time; a YAML file
//! named by `TOURNEY_CONFIG_PATH` replaces them.
//!
//! ```yaml
//! groups: [A, B, C, D, E]
//! qualifiers_per_group: 2
//! group_capacity: { A: 6, B: 6, C: 5, D: 5, E: 5 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;
use std::{env, fs};

use crate::error::ConfigError;
use crate::models::GroupLabel;
use crate::standings::DEFAULT_QUALIFIERS_PER_GROUP;

pub const CONFIG_PATH_ENV: &str = "TOURNEY_CONFIG_PATH";

pub const DEFAULT_CONFIG_YAML: &str = include_str!("../data/default_config.yaml");

static DEFAULT_CONFIG: OnceLock<TournamentConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub groups: Vec<GroupLabel>,
    #[serde(default = "default_qualifiers_per_group")]
    pub qualifiers_per_group: usize,
    #[serde(default)]
    pub group_capacity: BTreeMap<GroupLabel, usize>,
}

fn default_qualifiers_per_group() -> usize {
    DEFAULT_QUALIFIERS_PER_GROUP
}

impl Default for TournamentConfig {
    fn default() -> Self {
        default_config().clone()
    }
}

impl TournamentConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        log::debug!("Loaded tournament config from {:?}", path);
        Ok(config)
    }

    /// Defaults, or the file named by `TOURNEY_CONFIG_PATH` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(Path::new(path))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.groups.is_empty() {
            return Err(ConfigError::Invalid("at least one group is required".into()));
        }

        for (i, label) in self.groups.iter().enumerate() {
            if self.groups[..i].contains(label) {
                return Err(ConfigError::Invalid(format!("group {label} listed twice")));
            }
        }

        if self.qualifiers_per_group == 0 {
            return Err(ConfigError::Invalid(
                "qualifiers_per_group must be at least 1".into(),
            ));
        }

        Ok(())
    }

    pub fn has_group(&self, label: GroupLabel) -> bool {
        self.groups.contains(&label)
    }

    /// Maximum team count for `label`, `None` when uncapped.
    pub fn capacity(&self, label: GroupLabel) -> Option<usize> {
        self.group_capacity.get(&label).copied()
    }
}

/// Embedded default configuration, parsed once.
///
/// # Panics
///
/// Panics if the embedded YAML does not parse, which a normal build rules out.
pub fn default_config() -> &'static TournamentConfig {
    DEFAULT_CONFIG.get_or_init(|| {
        serde_yaml::from_str(DEFAULT_CONFIG_YAML).expect("Failed to parse default_config.yaml")
    })
}
