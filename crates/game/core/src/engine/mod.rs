//! Battle state machine.
//!
//! The [`BattleEngine`] owns one battle from roster intake to conclusion:
//!
//! ```text
//! NOT_STARTED --start--> ROUND_IN_PROGRESS --play_round--> ... --> CONCLUDED
//! ```
//!
//! Stats for every unit are resolved before the first log line is written,
//! so a bad reference aborts the battle with no narrative at all. Termination
//! is checked after each full round (first squad first). A roster that is
//! empty at start loses with zero rounds fought.

mod combat;
mod errors;
mod log;
mod turns;

pub use combat::{ActionOutcome, AttackReport, Dice, resolve_action};
pub use errors::BattleError;
pub use log::BattleLog;
pub use turns::schedule_round;

use crate::config::BattleConfig;
use crate::env::BattleEnv;
use crate::state::{BattleState, Roster, Side, SquadId};
use crate::stats::{CombatStats, resolve_unit};

/// Lifecycle phase of a [`BattleEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BattlePhase {
    NotStarted,
    RoundInProgress,
    Concluded,
}

/// Alive and dead head counts per side, taken after a round completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundTally {
    pub round: u32,
    pub alive: [usize; 2],
    pub dead: [usize; 2],
    pub initial: [usize; 2],
}

impl RoundTally {
    fn capture(round: u32, state: &BattleState) -> Self {
        Self {
            round,
            alive: Side::BOTH.map(|side| state.alive_count(side)),
            dead: Side::BOTH.map(|side| state.dead_count(side)),
            initial: Side::BOTH.map(|side| state.initial_count(side)),
        }
    }

    /// Every unit is either alive or dead, never both, never lost.
    pub fn is_conserved(&self) -> bool {
        Side::BOTH.into_iter().all(|side| {
            let i = side.index();
            self.alive[i] + self.dead[i] == self.initial[i]
        })
    }
}

/// Result of a concluded battle, ready to hand to the outcome committer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub seed: u64,
    pub log: BattleLog,
    pub winner: SquadId,
    pub loser: SquadId,
    pub winner_name: String,
    pub loser_name: String,
    pub rounds: u32,
    pub tallies: Vec<RoundTally>,
}

impl BattleOutcome {
    /// Report body as persisted: the joined log text.
    pub fn content(&self) -> String {
        self.log.to_text()
    }
}

/// Runs a single battle between two rosters.
pub struct BattleEngine<'a> {
    env: BattleEnv<'a>,
    config: BattleConfig,
    seed: u64,
    phase: BattlePhase,
    state: Option<BattleState>,
    log: BattleLog,
    round: u32,
    tallies: Vec<RoundTally>,
    loser: Option<Side>,
}

impl<'a> BattleEngine<'a> {
    pub fn new(env: BattleEnv<'a>, config: BattleConfig, seed: u64) -> Self {
        Self {
            env,
            config,
            seed,
            phase: BattlePhase::NotStarted,
            state: None,
            log: BattleLog::new(),
            round: 0,
            tallies: Vec::new(),
            loser: None,
        }
    }

    /// Convenience wrapper: start, play every round, return the outcome.
    pub fn run(mut self, first: &Roster, second: &Roster) -> Result<BattleOutcome, BattleError> {
        self.start(first, second)?;
        while self.phase == BattlePhase::RoundInProgress {
            self.play_round()?;
        }
        self.into_outcome()
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Validates the rosters, resolves stats and writes the intro.
    ///
    /// # Errors
    ///
    /// Fails without writing any log line when the same squad is passed
    /// twice, both rosters are empty, a unit appears twice, or a reference
    /// row is missing.
    pub fn start(&mut self, first: &Roster, second: &Roster) -> Result<(), BattleError> {
        self.expect_phase(BattlePhase::NotStarted)?;

        if first.squad.id == second.squad.id {
            return Err(BattleError::SameSquad(first.squad.id));
        }
        if first.is_empty() && second.is_empty() {
            return Err(BattleError::BothRostersEmpty {
                first: first.squad.id,
                second: second.squad.id,
            });
        }

        let tables = self.env.tables()?;
        let items = self.env.items()?;
        self.env.rng()?;

        let mut resolved: Vec<(Side, CombatStats)> =
            Vec::with_capacity(first.units.len() + second.units.len());
        for (side, roster) in [(Side::First, first), (Side::Second, second)] {
            for unit in &roster.units {
                resolved.push((side, resolve_unit(unit, tables, items)?));
            }
        }

        let mut state = BattleState::new(first.squad.clone(), second.squad.clone());
        let units = first.units.iter().chain(&second.units);
        for (unit, (side, stats)) in units.zip(resolved) {
            state
                .enlist(unit, side, stats)
                .map_err(BattleError::DuplicateUnit)?;
        }

        self.log.push(format!(
            "{} and {} begin to fight!",
            first.squad.name, second.squad.name
        ));
        for roster in [first, second] {
            self.log.push(format!(
                "{} has {} units...",
                roster.squad.name,
                roster.units.len()
            ));
            for unit in &roster.units {
                self.log.push(format!(
                    "{} - {} {} (level {}) wearing {} and wielding {}",
                    unit.name, unit.race, unit.class, unit.level, unit.armor, unit.weapon
                ));
            }
        }
        self.log.push("The battle begins!");

        let eliminated = state.eliminated();
        self.state = Some(state);
        self.phase = BattlePhase::RoundInProgress;

        if let Some(side) = eliminated {
            self.finish(side);
        }
        Ok(())
    }

    /// Plays one full round and returns the phase afterwards.
    ///
    /// # Errors
    ///
    /// [`BattleError::RoundLimitExceeded`] once `max_rounds` rounds have been
    /// played without an elimination.
    pub fn play_round(&mut self) -> Result<BattlePhase, BattleError> {
        self.expect_phase(BattlePhase::RoundInProgress)?;
        if self.round >= self.config.max_rounds {
            return Err(BattleError::RoundLimitExceeded {
                limit: self.config.max_rounds,
            });
        }

        let rng = self.env.rng()?;
        let state = self.state.as_mut().ok_or(BattleError::InvalidPhase {
            expected: BattlePhase::RoundInProgress,
            actual: self.phase,
        })?;

        self.round += 1;
        let dice = Dice::new(rng, &self.config, self.seed, self.round);
        for actor in schedule_round(state) {
            resolve_action(state, actor, &dice, &mut self.log);
        }

        self.tallies.push(RoundTally::capture(self.round, state));
        if let Some(side) = state.eliminated() {
            self.finish(side);
        }
        Ok(self.phase)
    }

    /// Consumes a concluded engine and returns its outcome.
    ///
    /// # Errors
    ///
    /// [`BattleError::InvalidPhase`] if the battle has not concluded, and
    /// [`BattleError::Unresolved`] if it concluded without a loser.
    pub fn into_outcome(self) -> Result<BattleOutcome, BattleError> {
        self.expect_phase(BattlePhase::Concluded)?;
        let (Some(state), Some(loser)) = (self.state, self.loser) else {
            return Err(BattleError::Unresolved);
        };

        let winning = state.squad(loser.opponent());
        let losing = state.squad(loser);
        Ok(BattleOutcome {
            seed: self.seed,
            winner: winning.id,
            loser: losing.id,
            winner_name: winning.name.clone(),
            loser_name: losing.name.clone(),
            log: self.log,
            rounds: self.round,
            tallies: self.tallies,
        })
    }

    fn finish(&mut self, loser: Side) {
        self.loser = Some(loser);
        self.phase = BattlePhase::Concluded;
        self.log.push("The battle is over!");
    }

    fn expect_phase(&self, expected: BattlePhase) -> Result<(), BattleError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}
