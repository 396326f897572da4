//! In-memory store for tests and local runs.

use std::sync::{Mutex, RwLock};

use warband_content::SquadSeed;
use warband_core::{Roster, Squad, SquadId};

use super::types::{
    BattleReport, Effect, EffectKind, ReportId, SquadSummary, TransactionReceipt, World,
};
use super::{
    ReportRepository, RepositoryError, Result, RosterRepository, SquadRepository,
    TransactionalStore,
};

/// In-memory implementation of every repository contract.
///
/// Transactions copy the world, apply effects to the copy and swap it in
/// only on success. A one-shot fault can be armed per effect kind to
/// simulate a storage failure mid-transaction.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    world: RwLock<World>,
    faults: Mutex<Vec<EffectKind>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next transaction that reaches an effect of `kind` fail.
    pub fn fail_next(&self, kind: EffectKind) -> Result<()> {
        self.faults
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .push(kind);
        Ok(())
    }

    /// Copy of the current world.
    pub fn snapshot(&self) -> Result<World> {
        self.read(|world| Ok(world.clone()))
    }

    fn read<T>(&self, f: impl FnOnce(&World) -> Result<T>) -> Result<T> {
        let world = self
            .world
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        f(&world)
    }

    fn take_fault(&self, kind: EffectKind) -> Result<()> {
        let mut faults = self
            .faults
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match faults.iter().position(|armed| *armed == kind) {
            Some(index) => {
                faults.remove(index);
                Err(RepositoryError::InjectedFault { kind })
            }
            None => Ok(()),
        }
    }
}

impl RosterRepository for InMemoryStore {
    fn load_roster(&self, squad: SquadId) -> Result<Roster> {
        self.read(|world| world.roster(squad))
    }
}

impl SquadRepository for InMemoryStore {
    fn insert_squad(&self, seed: &SquadSeed) -> Result<SquadId> {
        let mut world = self
            .world
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(world.insert_squad(seed))
    }

    fn squad(&self, id: SquadId) -> Result<Option<Squad>> {
        self.read(|world| Ok(world.squad(id).cloned()))
    }

    fn list_squads(&self) -> Result<Vec<SquadSummary>> {
        self.read(|world| Ok(world.summaries()))
    }
}

impl ReportRepository for InMemoryStore {
    fn report(&self, id: ReportId) -> Result<Option<BattleReport>> {
        self.read(|world| Ok(world.report(id).cloned()))
    }

    fn latest_report(&self) -> Result<Option<BattleReport>> {
        self.read(|world| Ok(world.latest_report().cloned()))
    }

    fn report_count(&self) -> Result<usize> {
        self.read(|world| Ok(world.reports().len()))
    }
}

impl TransactionalStore for InMemoryStore {
    fn run_in_transaction(&self, effects: &[Effect]) -> Result<TransactionReceipt> {
        let mut world = self
            .world
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut draft = world.clone();
        let receipt = draft.apply_all(effects, |effect| self.take_fault(effect.kind()))?;
        *world = draft;

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use warband_content::UnitSeed;

    use super::*;
    use crate::repository::NewReport;

    fn seed(name: &str) -> SquadSeed {
        SquadSeed {
            name: name.into(),
            commander: "Tester".into(),
            description: String::new(),
            level: 3,
            units: vec![UnitSeed {
                name: format!("{name} scout"),
                level: 1,
                race: "Elf".into(),
                class: "Scout".into(),
                armor: "Cloth".into(),
                weapon: "Bow".into(),
            }],
        }
    }

    fn commit_effects(winner: SquadId, loser: SquadId) -> Vec<Effect> {
        vec![
            Effect::InsertReport(NewReport {
                content: "log\n".into(),
                winner,
                loser,
                winner_name: "W".into(),
                loser_name: "L".into(),
                timestamp: Utc::now(),
            }),
            Effect::IncrementSquadLevel(winner),
            Effect::DeleteSquad(loser),
        ]
    }

    #[test]
    fn armed_fault_voids_the_whole_transaction() {
        let store = InMemoryStore::new();
        let a = store.insert_squad(&seed("A")).unwrap();
        let b = store.insert_squad(&seed("B")).unwrap();
        let before = store.snapshot().unwrap();

        store.fail_next(EffectKind::DeleteSquad).unwrap();
        let result = store.run_in_transaction(&commit_effects(a, b));

        assert!(matches!(
            result,
            Err(RepositoryError::InjectedFault {
                kind: EffectKind::DeleteSquad
            })
        ));
        assert_eq!(store.snapshot().unwrap(), before);

        // the fault is one-shot
        store.run_in_transaction(&commit_effects(a, b)).unwrap();
        assert_eq!(store.report_count().unwrap(), 1);
        assert_eq!(store.squad(a).unwrap().map(|s| s.level), Some(4));
        assert!(store.squad(b).unwrap().is_none());
    }
}
