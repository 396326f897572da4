//! High-level battle orchestrator.
//!
//! The [`Arena`] wires the Roster Loader, the battle engine and the Outcome
//! Committer around one store, and adds the surrounding operations: random
//! matchmaking, skirmishes on a blocking worker, the latest report and
//! empty-squad cleanup.

mod reservation;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::seq::SliceRandom;
use warband_content::WorldSeed;
use warband_core::{BattleConfig, BattleEngine, BattleOutcome, GameError, Squad, SquadId};

use crate::api::{ArenaError, Result};
use crate::committer::{CommitReceipt, OutcomeCommitter};
use crate::loader::RosterLoader;
use crate::oracle::OracleManager;
use crate::repository::{ArenaStore, BattleReportView, Effect, SquadSummary};

pub use reservation::Reservation;
use reservation::Reservations;

/// Arena configuration shared by every battle it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub battle: BattleConfig,
    /// Minimum number of free squads before matchmaking picks a pair.
    pub battle_threshold: usize,
}

impl ArenaConfig {
    pub const DEFAULT_BATTLE_THRESHOLD: usize = 2;
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            battle_threshold: Self::DEFAULT_BATTLE_THRESHOLD,
        }
    }
}

/// A fought and committed battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSummary {
    pub outcome: BattleOutcome,
    pub receipt: CommitReceipt,
}

/// Runs battles against one store.
///
/// Cheap to clone; clones share the store, the oracles and the reservation
/// set.
#[derive(Clone)]
pub struct Arena {
    config: ArenaConfig,
    oracles: OracleManager,
    store: Arc<dyn ArenaStore>,
    reservations: Reservations,
}

impl Arena {
    /// Create a new arena builder
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder::default()
    }

    /// Configured seed, or a fresh random one.
    pub fn next_seed(&self) -> u64 {
        self.config.battle.seed.unwrap_or_else(rand::random)
    }

    /// Loads both rosters and simulates the battle. Nothing is persisted.
    pub fn fight(&self, first: SquadId, second: SquadId) -> Result<BattleOutcome> {
        self.fight_with_seed(first, second, self.next_seed())
    }

    pub fn fight_with_seed(
        &self,
        first: SquadId,
        second: SquadId,
        seed: u64,
    ) -> Result<BattleOutcome> {
        let (first, second) = RosterLoader::new(self.store.as_ref()).load_pair(first, second)?;

        tracing::info!(
            first = %first.squad.name,
            second = %second.squad.name,
            seed,
            "battle started"
        );

        let engine = BattleEngine::new(
            self.oracles.as_battle_env(),
            self.config.battle.clone(),
            seed,
        );
        let outcome = engine.run(&first, &second).inspect_err(|err| {
            let severity = err.severity();
            if severity.is_internal() {
                tracing::error!(
                    first = %first.squad.id,
                    second = %second.squad.id,
                    code = err.error_code(),
                    severity = severity.as_str(),
                    error = %err,
                    "battle aborted"
                );
            } else {
                tracing::warn!(
                    first = %first.squad.id,
                    second = %second.squad.id,
                    code = err.error_code(),
                    severity = severity.as_str(),
                    error = %err,
                    "battle aborted"
                );
            }
        })?;

        tracing::info!(
            winner = %outcome.winner_name,
            loser = %outcome.loser_name,
            rounds = outcome.rounds,
            "battle concluded"
        );

        Ok(outcome)
    }

    /// Persists an outcome stamped with the current UTC time.
    pub fn commit(&self, outcome: &BattleOutcome) -> Result<CommitReceipt> {
        OutcomeCommitter::new(self.store.as_ref()).commit(outcome, Utc::now())
    }

    /// Fights and commits a battle between two explicit squads.
    ///
    /// # Errors
    ///
    /// [`ArenaError::SquadBusy`] if either squad is already fighting.
    pub fn battle(&self, first: SquadId, second: SquadId) -> Result<BattleSummary> {
        let _reservation = self.reservations.reserve([first, second])?;
        self.battle_reserved(first, second)
    }

    fn battle_reserved(&self, first: SquadId, second: SquadId) -> Result<BattleSummary> {
        let outcome = self.fight(first, second)?;
        let receipt = self.commit(&outcome)?;
        Ok(BattleSummary { outcome, receipt })
    }

    /// Picks two distinct free squads uniformly at random, or `None` when
    /// fewer than `battle_threshold` squads are free.
    pub fn select_contenders(&self) -> Result<Option<(SquadId, SquadId)>> {
        let held = self.reservations.lock()?;
        self.pick_contenders(&held)
    }

    fn pick_contenders(&self, held: &HashSet<SquadId>) -> Result<Option<(SquadId, SquadId)>> {
        let free: Vec<SquadId> = self
            .store
            .list_squads()?
            .into_iter()
            .map(|summary| summary.squad.id)
            .filter(|id| !held.contains(id))
            .collect();

        if free.len() < self.config.battle_threshold.max(2) {
            tracing::debug!(
                free = free.len(),
                threshold = self.config.battle_threshold,
                "not enough squads for a battle"
            );
            return Ok(None);
        }

        let picked: Vec<SquadId> = free
            .choose_multiple(&mut rand::thread_rng(), 2)
            .copied()
            .collect();
        match picked[..] {
            [first, second] => Ok(Some((first, second))),
            _ => Ok(None),
        }
    }

    /// Reserves a random pair, fights on a blocking worker and commits.
    ///
    /// Returns `Ok(None)` when matchmaking finds no pair. Concurrent
    /// skirmishes never share a squad.
    pub async fn run_skirmish(&self) -> Result<Option<BattleSummary>> {
        let reservation = {
            let mut held = self.reservations.lock()?;
            let Some((first, second)) = self.pick_contenders(&held)? else {
                return Ok(None);
            };
            self.reservations.claim(&mut held, [first, second])
        };

        self.fight_on_worker(reservation).await.map(Some)
    }

    /// [`Arena::battle`] on a blocking worker.
    pub async fn run_battle(&self, first: SquadId, second: SquadId) -> Result<BattleSummary> {
        let reservation = self.reservations.reserve([first, second])?;
        self.fight_on_worker(reservation).await
    }

    /// The worker owns the reservation, so the squads stay held until the
    /// battle is committed even if the awaiting future is dropped.
    async fn fight_on_worker(&self, reservation: Reservation) -> Result<BattleSummary> {
        let arena = self.clone();
        tokio::task::spawn_blocking(move || {
            let [first, second] = reservation.squads();
            let summary = arena.battle_reserved(first, second);
            drop(reservation);
            summary
        })
        .await
        .map_err(ArenaError::WorkerJoin)?
    }

    /// Most recently committed report, if any.
    pub fn latest_report(&self) -> Result<Option<BattleReportView>> {
        let report = self.store.latest_report()?;
        Ok(report.as_ref().map(BattleReportView::from))
    }

    pub fn squads(&self) -> Result<Vec<SquadSummary>> {
        Ok(self.store.list_squads()?)
    }

    /// Deletes every free squad without units in one transaction.
    pub fn cleanup_empty_squads(&self) -> Result<Vec<Squad>> {
        let held = self.reservations.lock()?;
        let effects: Vec<Effect> = self
            .store
            .list_squads()?
            .into_iter()
            .filter(|summary| summary.units == 0 && !held.contains(&summary.squad.id))
            .map(|summary| Effect::DeleteSquad(summary.squad.id))
            .collect();

        if effects.is_empty() {
            tracing::info!("no empty squads to remove");
            return Ok(Vec::new());
        }

        let receipt = self.store.run_in_transaction(&effects).inspect_err(|err| {
            tracing::warn!(error = %err, "empty squad cleanup rolled back");
        })?;

        let removed: Vec<Squad> = receipt.deleted.into_iter().map(|(squad, _)| squad).collect();
        for squad in &removed {
            tracing::info!(squad = %squad.id, name = %squad.name, "removed empty squad");
        }
        Ok(removed)
    }

    /// Inserts every seed squad with its units.
    pub fn seed_world(&self, seed: &WorldSeed) -> Result<Vec<SquadId>> {
        let ids = seed
            .squads
            .iter()
            .map(|squad| self.store.insert_squad(squad))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::info!(squads = ids.len(), "seeded world");
        Ok(ids)
    }
}

/// Builder for [`Arena`].
#[derive(Default)]
pub struct ArenaBuilder {
    config: ArenaConfig,
    oracles: Option<OracleManager>,
    store: Option<Arc<dyn ArenaStore>>,
}

impl ArenaBuilder {
    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn store(self, store: impl ArenaStore + 'static) -> Self {
        self.shared_store(Arc::new(store))
    }

    /// Uses a store the caller keeps a handle to.
    pub fn shared_store(mut self, store: Arc<dyn ArenaStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<Arena> {
        Ok(Arena {
            config: self.config,
            oracles: self.oracles.ok_or(ArenaError::MissingOracles)?,
            store: self.store.ok_or(ArenaError::MissingStore)?,
            reservations: Reservations::default(),
        })
    }
}
