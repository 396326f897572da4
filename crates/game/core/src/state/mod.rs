//! Squad, unit and in-battle state representation.
//!
//! [`roster`] holds the long-lived records that storage hands to the engine.
//! [`battle`] holds the battle-scoped working copy (health, alive sets) that
//! exists only for the duration of one battle and is never persisted.
pub mod battle;
pub mod roster;

pub use battle::{BattleState, Combatant};
pub use roster::{Roster, Side, Squad, SquadId, Unit, UnitId};
