use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use warband_core::{Squad, SquadId};

use super::ReportId;

/// Report fields known before the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub content: String,
    pub winner: SquadId,
    pub loser: SquadId,
    pub winner_name: String,
    pub loser_name: String,
    pub timestamp: DateTime<Utc>,
}

/// One step of a transactional commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    InsertReport(NewReport),
    IncrementSquadLevel(SquadId),
    /// Removes the squad and every unit it owns.
    DeleteSquad(SquadId),
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::InsertReport(_) => EffectKind::InsertReport,
            Effect::IncrementSquadLevel(_) => EffectKind::IncrementSquadLevel,
            Effect::DeleteSquad(_) => EffectKind::DeleteSquad,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    InsertReport,
    IncrementSquadLevel,
    DeleteSquad,
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EffectKind::InsertReport => "insert_report",
            EffectKind::IncrementSquadLevel => "increment_squad_level",
            EffectKind::DeleteSquad => "delete_squad",
        };
        write!(f, "{}", label)
    }
}

/// What a committed transaction changed, in effect order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub reports: Vec<ReportId>,
    /// Squad and its level after the increment.
    pub level_ups: Vec<(SquadId, u32)>,
    /// Removed squads together with how many units went with them.
    pub deleted: Vec<(Squad, usize)>,
}
