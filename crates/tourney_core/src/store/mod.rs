// Tournament persistence: JSON files with atomic writes.

pub mod error;
pub mod knockout_log;
pub mod tournament;

mod io;

pub use error::StoreError;
pub use knockout_log::KnockoutLog;
pub use tournament::TournamentStore;

use std::path::{Path, PathBuf};

pub const TOURNAMENT_FORMAT_VERSION: u32 = 1;

/// Storage key of the knockout log; also its file stem.
pub const KNOCKOUT_STORAGE_KEY: &str = "knockouts_v1";

pub const TOURNAMENT_FILE_NAME: &str = "tournament.json";

/// Directory holding one tournament's files.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tournament_path(&self) -> PathBuf {
        self.root.join(TOURNAMENT_FILE_NAME)
    }

    pub fn knockouts_path(&self) -> PathBuf {
        self.root.join(format!("{KNOCKOUT_STORAGE_KEY}.json"))
    }
}
