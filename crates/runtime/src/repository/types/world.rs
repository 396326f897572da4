//! The persisted world: squads, units and battle reports.

use serde::{Deserialize, Serialize};
use warband_content::SquadSeed;
use warband_core::{Roster, Squad, SquadId, Unit, UnitId};

use super::{BattleReport, Effect, ReportId, TransactionReceipt};
use crate::repository::{RepositoryError, Result};

/// A squad together with its current unit count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquadSummary {
    pub squad: Squad,
    pub units: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct IdCounters {
    squad: u32,
    unit: u32,
    report: u32,
}

/// Every record the stores keep, in insertion order.
///
/// Ids are allocated monotonically and never reused, even after deletion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    squads: Vec<Squad>,
    units: Vec<Unit>,
    reports: Vec<BattleReport>,
    #[serde(default)]
    next: IdCounters,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn squad(&self, id: SquadId) -> Option<&Squad> {
        self.squads.iter().find(|squad| squad.id == id)
    }

    pub fn unit_count(&self, id: SquadId) -> usize {
        self.units.iter().filter(|unit| unit.squad == id).count()
    }

    pub fn summaries(&self) -> Vec<SquadSummary> {
        self.squads
            .iter()
            .map(|squad| SquadSummary {
                squad: squad.clone(),
                units: self.unit_count(squad.id),
            })
            .collect()
    }

    /// The squad with its units in load order.
    pub fn roster(&self, id: SquadId) -> Result<Roster> {
        let squad = self
            .squad(id)
            .cloned()
            .ok_or(RepositoryError::SquadNotFound(id))?;
        let units = self
            .units
            .iter()
            .filter(|unit| unit.squad == id)
            .cloned()
            .collect();
        Ok(Roster::new(squad, units))
    }

    pub fn report(&self, id: ReportId) -> Option<&BattleReport> {
        self.reports.iter().find(|report| report.id == id)
    }

    pub fn reports(&self) -> &[BattleReport] {
        &self.reports
    }

    /// Most recently committed report. Ids follow commit order; timestamps
    /// are caller-supplied and may go backwards.
    pub fn latest_report(&self) -> Option<&BattleReport> {
        self.reports.iter().max_by_key(|report| report.id)
    }

    /// Inserts a squad and its units, assigning fresh ids.
    pub fn insert_squad(&mut self, seed: &SquadSeed) -> SquadId {
        self.next.squad += 1;
        let id = SquadId(self.next.squad);
        self.squads.push(Squad {
            id,
            name: seed.name.clone(),
            commander: seed.commander.clone(),
            description: seed.description.clone(),
            level: seed.level,
        });

        for unit in &seed.units {
            self.next.unit += 1;
            self.units.push(Unit {
                id: UnitId(self.next.unit),
                squad: id,
                name: unit.name.clone(),
                level: unit.level,
                race: unit.race.clone(),
                class: unit.class.clone(),
                armor: unit.armor.clone(),
                weapon: unit.weapon.clone(),
            });
        }
        id
    }

    /// Applies effects in order, recording what changed.
    ///
    /// Stops at the first failing effect and leaves `self` partially
    /// modified; callers run this on a private copy and publish it only on
    /// success.
    pub fn apply_all<'e>(
        &mut self,
        effects: impl IntoIterator<Item = &'e Effect>,
        mut before_each: impl FnMut(&Effect) -> Result<()>,
    ) -> Result<TransactionReceipt> {
        let mut receipt = TransactionReceipt::default();
        for effect in effects {
            before_each(effect)?;
            self.apply(effect, &mut receipt)?;
        }
        Ok(receipt)
    }

    fn apply(&mut self, effect: &Effect, receipt: &mut TransactionReceipt) -> Result<()> {
        match effect {
            Effect::InsertReport(report) => {
                self.next.report += 1;
                let id = ReportId(self.next.report);
                self.reports.push(BattleReport {
                    id,
                    content: report.content.clone(),
                    winner: report.winner,
                    loser: report.loser,
                    winner_name: report.winner_name.clone(),
                    loser_name: report.loser_name.clone(),
                    timestamp: report.timestamp,
                });
                receipt.reports.push(id);
            }
            Effect::IncrementSquadLevel(id) => {
                let squad = self
                    .squads
                    .iter_mut()
                    .find(|squad| squad.id == *id)
                    .ok_or(RepositoryError::SquadNotFound(*id))?;
                squad.level = squad
                    .level
                    .checked_add(1)
                    .ok_or(RepositoryError::LevelOverflow(*id))?;
                receipt.level_ups.push((*id, squad.level));
            }
            Effect::DeleteSquad(id) => {
                let position = self
                    .squads
                    .iter()
                    .position(|squad| squad.id == *id)
                    .ok_or(RepositoryError::SquadNotFound(*id))?;
                let squad = self.squads.remove(position);
                let before = self.units.len();
                self.units.retain(|unit| unit.squad != *id);
                receipt.deleted.push((squad, before - self.units.len()));
            }
        }
        Ok(())
    }
}
