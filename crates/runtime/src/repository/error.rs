//! Error types raised by repository implementations.

use thiserror::Error;
use warband_core::SquadId;

use super::EffectKind;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("{0} not found")]
    SquadNotFound(SquadId),

    #[error("{0} is already at the maximum level")]
    LevelOverflow(SquadId),

    #[error("simulated storage fault while applying {kind}")]
    InjectedFault { kind: EffectKind },
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
