//! Oracle access errors.
//!
//! Errors related to oracle availability and reference lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

/// Errors that occur when accessing Oracle data.
///
/// Any of these aborts a battle before the first log line is produced: the
/// engine cannot derive combat stats without every reference row.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// TablesOracle is not available in the environment.
    #[error("TablesOracle not available")]
    TablesNotAvailable,

    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("race '{race}' of {unit} not found")]
    RaceNotFound { unit: UnitId, race: String },

    #[error("armor '{armor}' of {unit} not found")]
    ArmorNotFound { unit: UnitId, armor: String },

    #[error("weapon '{weapon}' of {unit} not found")]
    WeaponNotFound { unit: UnitId, weapon: String },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            TablesNotAvailable | ItemsNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,

            // Not found errors are validation errors - invalid references
            RaceNotFound { .. } | ArmorNotFound { .. } | WeaponNotFound { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            RaceNotFound { .. } => "ORACLE_RACE_NOT_FOUND",
            ArmorNotFound { .. } => "ORACLE_ARMOR_NOT_FOUND",
            WeaponNotFound { .. } => "ORACLE_WEAPON_NOT_FOUND",
        }
    }
}
