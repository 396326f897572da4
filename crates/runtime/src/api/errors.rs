//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the battle engine, repositories and the blocking
//! battle worker so clients can bubble them up with consistent context.
use thiserror::Error;
use warband_core::{BattleError, SquadId};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, ArenaError>;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("battle could not be fought")]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("commit of {winner} over {loser} failed; nothing was persisted")]
    Commit {
        winner: SquadId,
        loser: SquadId,
        #[source]
        source: RepositoryError,
    },

    #[error("store acknowledged a commit without applying every effect")]
    IncompleteReceipt,

    #[error("{0} is already in a battle")]
    SquadBusy(SquadId),

    #[error("arena reservation lock was poisoned")]
    ReservationsPoisoned,

    #[error("battle worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("arena requires oracles to be configured before building")]
    MissingOracles,

    #[error("arena requires a store to be configured before building")]
    MissingStore,
}
