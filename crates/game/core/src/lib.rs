//! Deterministic battle rules shared by the runtime and offline tools.
//!
//! `warband-core` defines the canonical combat rules (stat derivation, turn
//! scheduling, action resolution, termination) and exposes pure APIs with no
//! I/O. Every battle flows through [`engine::BattleEngine`]; reference data and
//! randomness reach the engine only through the oracles in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use config::BattleConfig;
pub use engine::{
    ActionOutcome, AttackReport, BattleEngine, BattleError, BattleLog, BattleOutcome, BattlePhase,
    RoundTally, resolve_action, schedule_round,
};
pub use env::{
    ArmorStats, BattleEnv, Env, ItemOracle, OracleError, PcgRng, RaceStats, RngOracle,
    ScriptedRng, TablesOracle, WeaponStats, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{BattleState, Combatant, Roster, Side, Squad, SquadId, Unit, UnitId};
pub use stats::{CombatStats, resolve_unit};
