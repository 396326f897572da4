//! Single-action combat resolution.
//!
//! One call resolves one scheduled unit's turn: pick a target among the alive
//! enemies, roll attack and defense, apply damage and drop the target from
//! its squad's alive set when its health reaches zero.
//!
//! Damage equals the attack total. The defense roll and total are rolled and
//! reported but do not reduce damage.

use super::BattleLog;
use crate::config::BattleConfig;
use crate::env::{RngOracle, compute_seed};
use crate::state::{BattleState, UnitId};

const TARGET_CONTEXT: u32 = 0;
const ATTACK_CONTEXT: u32 = 1;
const DEFENSE_CONTEXT: u32 = 2;

/// Random draws for one round, seeded by battle seed, round and actor.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    config: &'a BattleConfig,
    battle_seed: u64,
    round: u32,
}

impl<'a> Dice<'a> {
    pub fn new(
        rng: &'a dyn RngOracle,
        config: &'a BattleConfig,
        battle_seed: u64,
        round: u32,
    ) -> Self {
        Self {
            rng,
            config,
            battle_seed,
            round,
        }
    }

    fn seed(&self, actor: UnitId, context: u32) -> u64 {
        compute_seed(self.battle_seed, self.round as u64, actor.0, context)
    }

    /// Uniform index in `0..count`. `count` must be at least 1.
    pub fn pick_target(&self, actor: UnitId, count: usize) -> usize {
        let max = count.saturating_sub(1) as u32;
        self.rng.range(self.seed(actor, TARGET_CONTEXT), 0, max) as usize
    }

    pub fn attack_roll(&self, actor: UnitId) -> u32 {
        self.rng
            .roll_die(self.seed(actor, ATTACK_CONTEXT), self.config.attack_die)
    }

    pub fn defense_roll(&self, actor: UnitId) -> u32 {
        self.rng
            .roll_die(self.seed(actor, DEFENSE_CONTEXT), self.config.defense_die)
    }
}

/// Everything that happened during one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub actor: UnitId,
    pub target: UnitId,
    pub attack_roll: u32,
    pub defense_roll: u32,
    pub attack_total: i32,
    pub defense_total: i32,
    pub damage: u32,
    pub remaining_health: u32,
    pub defeated: bool,
}

/// Result of resolving one scheduled turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The actor died earlier this round (or is unknown); nothing logged.
    Skipped,
    /// No alive enemy was left to attack.
    NoEnemies,
    Attack(AttackReport),
}

fn roll_total(roll: u32, bonus: i32) -> i32 {
    i32::try_from(roll).unwrap_or(i32::MAX).saturating_add(bonus)
}

/// Resolves one unit's action against the shared battle state.
pub fn resolve_action(
    state: &mut BattleState,
    actor: UnitId,
    dice: &Dice<'_>,
    log: &mut BattleLog,
) -> ActionOutcome {
    let Some(acting) = state.combatant(actor).filter(|c| c.is_alive()) else {
        return ActionOutcome::Skipped;
    };
    let actor_name = acting.name.clone();
    let side = acting.side;
    let attack_bonus = acting.stats.attack_bonus;

    let actor_squad = state.squad(side).name.clone();
    let target_squad = state.squad(side.opponent()).name.clone();

    let candidates: Vec<UnitId> = state.alive_on(side.opponent()).map(|c| c.id).collect();
    if candidates.is_empty() {
        log.push(format!(
            "{actor_name} of {actor_squad} has no enemies to attack!"
        ));
        return ActionOutcome::NoEnemies;
    }

    let target_id = candidates[dice.pick_target(actor, candidates.len())];
    let Some(target) = state.combatant_mut(target_id) else {
        return ActionOutcome::Skipped;
    };
    let target_name = target.name.clone();

    log.push(format!(
        "{actor_name} of {actor_squad} now attacks {target_name} of {target_squad}."
    ));

    let attack_roll = dice.attack_roll(actor);
    log.push(format!(
        "{actor_name} rolls a {attack_roll} to attack {target_name}."
    ));

    let defense_roll = dice.defense_roll(actor);
    log.push(format!(
        "{target_name} rolls a {defense_roll} to defend against {actor_name}."
    ));

    let attack_total = roll_total(attack_roll, attack_bonus);
    let defense_total = roll_total(defense_roll, target.stats.defense_bonus);

    let damage = attack_total.max(0).unsigned_abs();
    target.health = target.health.saturating_sub(damage);
    let remaining_health = target.health;
    let defeated = !target.is_alive();

    log.push(format!(
        "{target_name} of {target_squad} now has {remaining_health} health remaining."
    ));
    if defeated {
        log.push(format!("{target_name} of {target_squad} has been defeated!"));
    }

    ActionOutcome::Attack(AttackReport {
        actor,
        target: target_id,
        attack_roll,
        defense_roll,
        attack_total,
        defense_total,
        damage,
        remaining_health,
        defeated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{Side, Squad, SquadId, Unit};
    use crate::stats::CombatStats;

    fn squad(id: u32, name: &str) -> Squad {
        Squad {
            id: SquadId(id),
            name: name.into(),
            commander: "Tester".into(),
            description: String::new(),
            level: 1,
        }
    }

    fn enlist(state: &mut BattleState, id: u32, name: &str, side: Side, stats: CombatStats) {
        let unit = Unit {
            id: UnitId(id),
            squad: SquadId(side.index() as u32 + 1),
            name: name.into(),
            level: 1,
            race: "Human".into(),
            class: "Fighter".into(),
            armor: "None".into(),
            weapon: "Fists".into(),
        };
        state.enlist(&unit, side, stats).unwrap();
    }

    fn stats(hp: u32, attack: i32, defense: i32) -> CombatStats {
        CombatStats {
            effective_speed: 5,
            max_health: hp,
            attack_bonus: attack,
            defense_bonus: defense,
        }
    }

    fn duel(target_hp: u32, attack: i32) -> BattleState {
        let mut state = BattleState::new(squad(1, "Red"), squad(2, "Blue"));
        enlist(&mut state, 1, "Ana", Side::First, stats(20, attack, 0));
        enlist(&mut state, 2, "Bo", Side::Second, stats(target_hp, 0, 7));
        state
    }

    #[test]
    fn damage_is_the_attack_total_and_ignores_defense() {
        let mut state = duel(30, 4);
        let rng = ScriptedRng::new([10, 20]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        let ActionOutcome::Attack(report) = outcome else {
            panic!("expected an attack, got {outcome:?}");
        };
        assert_eq!(report.attack_total, 14);
        assert_eq!(report.defense_total, 27);
        assert_eq!(report.damage, 14);
        assert_eq!(report.remaining_health, 16);
        assert!(!report.defeated);
        assert_eq!(
            log.lines(),
            [
                "Ana of Red now attacks Bo of Blue.",
                "Ana rolls a 10 to attack Bo.",
                "Bo rolls a 20 to defend against Ana.",
                "Bo of Blue now has 16 health remaining.",
            ]
        );
    }

    #[test]
    fn lethal_hit_clamps_health_and_logs_defeat() {
        let mut state = duel(5, 3);
        let rng = ScriptedRng::new([12, 1]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        resolve_action(&mut state, UnitId(1), &dice, &mut log);

        assert_eq!(state.combatant(UnitId(2)).unwrap().health, 0);
        assert_eq!(state.alive_count(Side::Second), 0);
        assert_eq!(
            log.lines().last().map(String::as_str),
            Some("Bo of Blue has been defeated!")
        );
    }

    #[test]
    fn negative_attack_total_deals_no_damage() {
        let mut state = duel(10, -25);
        let rng = ScriptedRng::new([3, 3]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        assert!(matches!(
            outcome,
            ActionOutcome::Attack(AttackReport { damage: 0, remaining_health: 10, .. })
        ));
    }

    #[test]
    fn dead_actor_is_skipped_silently() {
        let mut state = duel(10, 1);
        state.combatant_mut(UnitId(1)).unwrap().health = 0;
        let rng = ScriptedRng::new([]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        assert_eq!(outcome, ActionOutcome::Skipped);
        assert!(log.is_empty());
    }

    #[test]
    fn no_alive_enemies_logs_and_returns() {
        let mut state = duel(10, 1);
        state.combatant_mut(UnitId(2)).unwrap().health = 0;
        let rng = ScriptedRng::new([7]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        assert_eq!(outcome, ActionOutcome::NoEnemies);
        assert_eq!(log.lines(), ["Ana of Red has no enemies to attack!"]);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn target_is_picked_among_alive_enemies_in_roster_order() {
        let mut state = BattleState::new(squad(1, "Red"), squad(2, "Blue"));
        enlist(&mut state, 1, "Ana", Side::First, stats(20, 0, 0));
        enlist(&mut state, 2, "Bo", Side::Second, stats(0, 0, 0));
        enlist(&mut state, 3, "Cy", Side::Second, stats(9, 0, 0));
        enlist(&mut state, 4, "Di", Side::Second, stats(9, 0, 0));

        // index 1 among [Cy, Di]
        let rng = ScriptedRng::new([1, 2, 2]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        assert!(matches!(
            outcome,
            ActionOutcome::Attack(AttackReport { target: UnitId(4), .. })
        ));
    }

    #[test]
    fn huge_bonuses_saturate_instead_of_overflowing() {
        let mut state = duel(u32::MAX, i32::MAX);
        state.combatant_mut(UnitId(2)).unwrap().stats.defense_bonus = i32::MAX;
        let rng = ScriptedRng::new([20, 20]);
        let config = BattleConfig::default();
        let dice = Dice::new(&rng, &config, 0, 1);
        let mut log = BattleLog::new();

        let outcome = resolve_action(&mut state, UnitId(1), &dice, &mut log);

        let ActionOutcome::Attack(report) = outcome else {
            panic!("expected an attack, got {outcome:?}");
        };
        assert_eq!(report.attack_total, i32::MAX);
        assert_eq!(report.defense_total, i32::MAX);
        assert_eq!(report.damage, i32::MAX as u32);
        assert_eq!(report.remaining_health, u32::MAX - i32::MAX as u32);
    }
}
