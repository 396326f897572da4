//! Stat resolution: reference rows → battle-scoped combat numbers.
//!
//! Formulas:
//! - effective_speed = race.base_speed − armor.weight (missing weight = 0)
//! - max_health      = race.base_hp
//! - attack_bonus    = weapon.damage + race.base_damage
//! - defense_bonus   = armor.defense_bonus
//!
//! Sums saturate at the `i32` bounds. The derived numbers are recomputed at the start of every battle and are
//! never stored on the unit.

use crate::env::{ArmorStats, ItemOracle, OracleError, RaceStats, TablesOracle, WeaponStats};
use crate::state::Unit;

/// Combat numbers derived for one unit at battle start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatStats {
    /// Turn-order priority; higher acts first.
    pub effective_speed: i32,
    /// Starting health for this battle.
    pub max_health: u32,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
}

impl CombatStats {
    /// Derives combat stats from already-resolved reference rows.
    pub fn derive(race: &RaceStats, armor: &ArmorStats, weapon: &WeaponStats) -> Self {
        Self {
            effective_speed: race.base_speed.saturating_sub(armor.weight.unwrap_or(0)),
            max_health: race.base_hp,
            attack_bonus: weapon.damage.saturating_add(race.base_damage),
            defense_bonus: armor.defense_bonus,
        }
    }
}

/// Looks up a unit's race, armor and weapon rows and derives its stats.
///
/// # Errors
///
/// Returns the first missing reference (race, then armor, then weapon) as an
/// [`OracleError`]; a unit with an unknown reference cannot fight.
pub fn resolve_unit<T, I>(unit: &Unit, tables: &T, items: &I) -> Result<CombatStats, OracleError>
where
    T: TablesOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    let race = tables
        .race(&unit.race)
        .ok_or_else(|| OracleError::RaceNotFound {
            unit: unit.id,
            race: unit.race.clone(),
        })?;
    let armor = items
        .armor(&unit.armor)
        .ok_or_else(|| OracleError::ArmorNotFound {
            unit: unit.id,
            armor: unit.armor.clone(),
        })?;
    let weapon = items
        .weapon(&unit.weapon)
        .ok_or_else(|| OracleError::WeaponNotFound {
            unit: unit.id,
            weapon: unit.weapon.clone(),
        })?;

    Ok(CombatStats::derive(&race, &armor, &weapon))
}
