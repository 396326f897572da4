//! Runtime orchestration for warband battles.
//!
//! This crate wires the pure rules of `warband-core` to storage and content.
//! Consumers build an [`Arena`] from an [`OracleManager`] and a store, then
//! fight, commit and query battles through it.
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`loader`] and [`committer`] sit on either side of the battle engine
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod arena;
pub mod committer;
pub mod loader;
pub mod oracle;
pub mod repository;

pub use api::{ArenaError, Result};
pub use arena::{Arena, ArenaBuilder, ArenaConfig, BattleSummary, Reservation};
pub use committer::{CommitReceipt, OutcomeCommitter, commit_effects};
pub use loader::RosterLoader;
pub use oracle::{ItemOracleImpl, OracleManager, TablesOracleImpl};
pub use repository::{
    ArenaStore, BattleReport, BattleReportView, Effect, EffectKind, FileStore, InMemoryStore,
    NewReport, ReportId, ReportRepository, RepositoryError, RosterRepository, SquadRepository,
    SquadSummary, TransactionReceipt, TransactionalStore, World,
};
