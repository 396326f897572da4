//! Repository contracts for squads, rosters, reports and atomic commits.

use warband_content::SquadSeed;
use warband_core::{Roster, Squad, SquadId};

use super::types::{BattleReport, Effect, ReportId, SquadSummary, TransactionReceipt};
use super::Result;

/// Source of battle rosters.
pub trait RosterRepository: Send + Sync {
    /// Loads a squad and its units in roster order.
    ///
    /// Fails with [`super::RepositoryError::SquadNotFound`] for unknown ids.
    fn load_roster(&self, squad: SquadId) -> Result<Roster>;
}

/// Squad CRUD surface the arena needs.
pub trait SquadRepository: Send + Sync {
    /// Inserts a squad and its units, returning the new squad id.
    fn insert_squad(&self, seed: &SquadSeed) -> Result<SquadId>;

    fn squad(&self, id: SquadId) -> Result<Option<Squad>>;

    /// All squads in id order with their unit counts.
    fn list_squads(&self) -> Result<Vec<SquadSummary>>;
}

/// Read access to committed battle reports.
pub trait ReportRepository: Send + Sync {
    fn report(&self, id: ReportId) -> Result<Option<BattleReport>>;

    fn latest_report(&self) -> Result<Option<BattleReport>>;

    fn report_count(&self) -> Result<usize>;
}

/// All-or-nothing execution of an ordered effect list.
pub trait TransactionalStore: Send + Sync {
    /// Applies every effect or none of them.
    ///
    /// On error no effect is visible to any reader.
    fn run_in_transaction(&self, effects: &[Effect]) -> Result<TransactionReceipt>;
}

/// Everything the arena needs from one store.
pub trait ArenaStore:
    RosterRepository + SquadRepository + ReportRepository + TransactionalStore
{
}

impl<T> ArenaStore for T where
    T: RosterRepository + SquadRepository + ReportRepository + TransactionalStore
{
}
