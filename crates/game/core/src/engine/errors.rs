//! Error types for the battle engine.

use super::BattlePhase;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{SquadId, UnitId};

/// Errors surfaced while setting up or running a battle.
///
/// Every variant is raised before any state leaves the engine, so a failed
/// battle never reaches the outcome committer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("{0} cannot fight itself")]
    SameSquad(SquadId),

    #[error("both {first} and {second} have no units")]
    BothRostersEmpty { first: SquadId, second: SquadId },

    #[error("{0} is listed more than once")]
    DuplicateUnit(UnitId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("engine is in phase {actual}, expected {expected}")]
    InvalidPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("battle did not conclude within {limit} rounds")]
    RoundLimitExceeded { limit: u32 },

    #[error("battle concluded without a winner")]
    Unresolved,
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        use BattleError::*;
        match self {
            SameSquad(_) | BothRostersEmpty { .. } | DuplicateUnit(_) => ErrorSeverity::Validation,
            Oracle(err) => err.severity(),
            InvalidPhase { .. } | RoundLimitExceeded { .. } | Unresolved => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use BattleError::*;
        match self {
            SameSquad(_) => "BATTLE_SAME_SQUAD",
            BothRostersEmpty { .. } => "BATTLE_BOTH_ROSTERS_EMPTY",
            DuplicateUnit(_) => "BATTLE_DUPLICATE_UNIT",
            Oracle(err) => err.error_code(),
            InvalidPhase { .. } => "BATTLE_INVALID_PHASE",
            RoundLimitExceeded { .. } => "BATTLE_ROUND_LIMIT_EXCEEDED",
            Unresolved => "BATTLE_UNRESOLVED",
        }
    }
}
