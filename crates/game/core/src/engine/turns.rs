use std::cmp::Reverse;

use crate::state::{BattleState, Combatant, UnitId};

/// Builds this round's acting order from the currently alive units.
///
/// Sorted by descending effective speed. Ties go to the unit loaded earlier
/// (first squad before second, each squad in roster order), so the order is
/// fully determined by the rosters and never by container iteration order.
/// Called fresh every round; units that died in earlier rounds are absent.
pub fn schedule_round(state: &BattleState) -> Vec<UnitId> {
    let mut alive: Vec<&Combatant> = state.alive().collect();
    alive.sort_by_key(|c| (Reverse(c.stats.effective_speed), c.order));
    alive.into_iter().map(|c| c.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Side, Squad, SquadId, Unit};
    use crate::stats::CombatStats;

    fn squad(id: u32) -> Squad {
        Squad {
            id: SquadId(id),
            name: format!("Squad {id}"),
            commander: "Tester".into(),
            description: String::new(),
            level: 1,
        }
    }

    fn enlist(state: &mut BattleState, id: u32, side: Side, speed: i32, hp: u32) {
        let unit = Unit {
            id: UnitId(id),
            squad: SquadId(side.index() as u32 + 1),
            name: format!("U{id}"),
            level: 1,
            race: "Human".into(),
            class: "Fighter".into(),
            armor: "None".into(),
            weapon: "Fists".into(),
        };
        let stats = CombatStats {
            effective_speed: speed,
            max_health: hp,
            attack_bonus: 0,
            defense_bonus: 0,
        };
        state.enlist(&unit, side, stats).unwrap();
    }

    #[test]
    fn faster_units_act_first() {
        let mut state = BattleState::new(squad(1), squad(2));
        enlist(&mut state, 1, Side::First, 3, 10);
        enlist(&mut state, 2, Side::Second, 9, 10);
        enlist(&mut state, 3, Side::First, -2, 10);

        assert_eq!(
            schedule_round(&state),
            vec![UnitId(2), UnitId(1), UnitId(3)]
        );
    }

    #[test]
    fn ties_follow_load_order() {
        let mut state = BattleState::new(squad(1), squad(2));
        enlist(&mut state, 30, Side::First, 5, 10);
        enlist(&mut state, 10, Side::First, 5, 10);
        enlist(&mut state, 20, Side::Second, 5, 10);

        assert_eq!(
            schedule_round(&state),
            vec![UnitId(30), UnitId(10), UnitId(20)]
        );
    }

    #[test]
    fn dead_units_are_not_scheduled() {
        let mut state = BattleState::new(squad(1), squad(2));
        enlist(&mut state, 1, Side::First, 5, 10);
        enlist(&mut state, 2, Side::Second, 7, 0);

        assert_eq!(schedule_round(&state), vec![UnitId(1)]);
    }
}
