//! Persisted records and transactional effects.

mod effect;
mod report;
mod world;

pub use effect::{Effect, EffectKind, NewReport, TransactionReceipt};
pub use report::{BattleReport, BattleReportView, ReportId};
pub use world::{SquadSummary, World};
