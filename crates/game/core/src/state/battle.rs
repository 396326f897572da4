//! Battle-scoped working state.
//!
//! Health and alive-set membership live here for one battle only. Nothing in
//! this module is written back to storage.

use std::collections::HashMap;

use super::{Side, Squad, Unit, UnitId};
use crate::stats::CombatStats;

/// A unit's working copy for the duration of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: UnitId,
    pub side: Side,
    pub name: String,
    pub stats: CombatStats,
    /// Current health; starts at `stats.max_health` and never goes below zero.
    pub health: u32,
    /// Position in the combined load order (first squad's units, then the
    /// second squad's). Used as the explicit turn-order tie-break.
    pub order: usize,
}

impl Combatant {
    pub fn new(unit: &Unit, side: Side, stats: CombatStats, order: usize) -> Self {
        Self {
            id: unit.id,
            side,
            name: unit.name.clone(),
            stats,
            health: stats.max_health,
            order,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Shared in-memory state mutated by the combat resolver.
///
/// Combatants are stored in load order; a unit is alive exactly when its
/// health is above zero, so the alive set shrinks the instant a unit drops.
#[derive(Clone, Debug)]
pub struct BattleState {
    squads: [Squad; 2],
    combatants: Vec<Combatant>,
    slots: HashMap<UnitId, usize>,
    initial: [usize; 2],
}

impl BattleState {
    pub fn new(first: Squad, second: Squad) -> Self {
        Self {
            squads: [first, second],
            combatants: Vec::new(),
            slots: HashMap::new(),
            initial: [0, 0],
        }
    }

    /// Adds a unit to the given side at full health.
    ///
    /// Returns the unit id back as an error if it is already enlisted.
    pub fn enlist(&mut self, unit: &Unit, side: Side, stats: CombatStats) -> Result<(), UnitId> {
        if self.slots.contains_key(&unit.id) {
            return Err(unit.id);
        }

        let order = self.combatants.len();
        self.combatants
            .push(Combatant::new(unit, side, stats, order));
        self.slots.insert(unit.id, order);
        self.initial[side.index()] += 1;
        Ok(())
    }

    pub fn squad(&self, side: Side) -> &Squad {
        &self.squads[side.index()]
    }

    pub fn combatant(&self, id: UnitId) -> Option<&Combatant> {
        self.slots.get(&id).map(|&slot| &self.combatants[slot])
    }

    pub(crate) fn combatant_mut(&mut self, id: UnitId) -> Option<&mut Combatant> {
        let slot = *self.slots.get(&id)?;
        self.combatants.get_mut(slot)
    }

    pub fn alive(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(|c| c.is_alive())
    }

    /// Alive combatants of one side, in load order.
    pub fn alive_on(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.alive().filter(move |c| c.side == side)
    }

    pub fn alive_count(&self, side: Side) -> usize {
        self.alive_on(side).count()
    }

    pub fn dead_count(&self, side: Side) -> usize {
        self.combatants
            .iter()
            .filter(|c| c.side == side && !c.is_alive())
            .count()
    }

    pub fn initial_count(&self, side: Side) -> usize {
        self.initial[side.index()]
    }

    /// Returns the first side (in [`Side::BOTH`] order) with no units left.
    pub fn eliminated(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.alive_count(side) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SquadId;

    fn squad(id: u32) -> Squad {
        Squad {
            id: SquadId(id),
            name: format!("Squad {id}"),
            commander: "Tester".into(),
            description: String::new(),
            level: 1,
        }
    }

    fn unit(id: u32, squad: u32) -> Unit {
        Unit {
            id: UnitId(id),
            squad: SquadId(squad),
            name: format!("Unit {id}"),
            level: 1,
            race: "Human".into(),
            class: "Fighter".into(),
            armor: "Leather".into(),
            weapon: "Sword".into(),
        }
    }

    fn stats(hp: u32) -> CombatStats {
        CombatStats {
            effective_speed: 10,
            max_health: hp,
            attack_bonus: 1,
            defense_bonus: 1,
        }
    }

    #[test]
    fn enlist_tracks_order_and_counts() {
        let mut state = BattleState::new(squad(1), squad(2));
        state.enlist(&unit(10, 1), Side::First, stats(5)).unwrap();
        state.enlist(&unit(20, 2), Side::Second, stats(5)).unwrap();
        state.enlist(&unit(11, 1), Side::First, stats(5)).unwrap();

        assert_eq!(state.initial_count(Side::First), 2);
        assert_eq!(state.initial_count(Side::Second), 1);
        assert_eq!(state.combatant(UnitId(11)).unwrap().order, 2);
        assert_eq!(state.eliminated(), None);
    }

    #[test]
    fn duplicate_unit_is_rejected() {
        let mut state = BattleState::new(squad(1), squad(2));
        state.enlist(&unit(10, 1), Side::First, stats(5)).unwrap();

        assert_eq!(
            state.enlist(&unit(10, 2), Side::Second, stats(5)),
            Err(UnitId(10))
        );
    }

    #[test]
    fn zero_health_leaves_alive_set() {
        let mut state = BattleState::new(squad(1), squad(2));
        state.enlist(&unit(10, 1), Side::First, stats(5)).unwrap();
        state.enlist(&unit(20, 2), Side::Second, stats(5)).unwrap();

        state.combatant_mut(UnitId(20)).unwrap().health = 0;

        assert_eq!(state.alive_count(Side::Second), 0);
        assert_eq!(state.dead_count(Side::Second), 1);
        assert_eq!(state.eliminated(), Some(Side::Second));
    }

    #[test]
    fn empty_side_is_eliminated_from_the_start() {
        let mut state = BattleState::new(squad(1), squad(2));
        state.enlist(&unit(20, 2), Side::Second, stats(5)).unwrap();

        assert_eq!(state.eliminated(), Some(Side::First));
    }
}
