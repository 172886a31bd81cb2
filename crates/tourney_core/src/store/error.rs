use thiserror::Error;

use crate::error::RosterError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error(transparent)]
    Rejected(#[from] RosterError),
}

impl StoreError {
    /// Validation rejections leave the store untouched and can be retried
    /// with corrected input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::Rejected(_) | StoreError::Io(_))
    }
}
