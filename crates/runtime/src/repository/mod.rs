//! Storage adapters for squads, rosters and battle reports.
//!
//! Two implementations share the [`World`] model: [`InMemoryStore`] for tests
//! and local runs, and [`FileStore`] for a durable JSON document. Both run
//! commits as an all-or-nothing effect list.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::{
    ArenaStore, ReportRepository, RosterRepository, SquadRepository, TransactionalStore,
};
pub use types::{
    BattleReport, BattleReportView, Effect, EffectKind, NewReport, ReportId, SquadSummary,
    TransactionReceipt, World,
};
