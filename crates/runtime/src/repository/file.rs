//! File-backed store persisting the whole world as one JSON document.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use warband_content::SquadSeed;
use warband_core::{Roster, Squad, SquadId};

use super::types::{BattleReport, Effect, ReportId, SquadSummary, TransactionReceipt, World};
use super::{
    ReportRepository, RepositoryError, Result, RosterRepository, SquadRepository,
    TransactionalStore,
};

/// File-based implementation of every repository contract.
///
/// # File Format
///
/// The [`World`] is stored as pretty-printed JSON. Writes go to a sibling
/// `*.json.tmp` file which is then renamed over the live file, so readers see
/// either the old or the new world, never a torn one. An in-process mutex
/// serializes writers.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens (or prepares) a store at `path`. A missing file is an empty world.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Reads the current world from disk.
    pub fn load(&self) -> Result<World> {
        if !self.path.exists() {
            return Ok(World::new());
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let world: World = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded world from {}", self.path.display());

        Ok(world)
    }

    fn save(&self, world: &World) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(world)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved world to {}", self.path.display());

        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut World) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut world = self.load()?;
        let value = f(&mut world)?;
        self.save(&world)?;
        Ok(value)
    }
}

impl RosterRepository for FileStore {
    fn load_roster(&self, squad: SquadId) -> Result<Roster> {
        self.load()?.roster(squad)
    }
}

impl SquadRepository for FileStore {
    fn insert_squad(&self, seed: &SquadSeed) -> Result<SquadId> {
        self.modify(|world| Ok(world.insert_squad(seed)))
    }

    fn squad(&self, id: SquadId) -> Result<Option<Squad>> {
        Ok(self.load()?.squad(id).cloned())
    }

    fn list_squads(&self) -> Result<Vec<SquadSummary>> {
        Ok(self.load()?.summaries())
    }
}

impl ReportRepository for FileStore {
    fn report(&self, id: ReportId) -> Result<Option<BattleReport>> {
        Ok(self.load()?.report(id).cloned())
    }

    fn latest_report(&self) -> Result<Option<BattleReport>> {
        Ok(self.load()?.latest_report().cloned())
    }

    fn report_count(&self) -> Result<usize> {
        Ok(self.load()?.reports().len())
    }
}

impl TransactionalStore for FileStore {
    fn run_in_transaction(&self, effects: &[Effect]) -> Result<TransactionReceipt> {
        // `modify` only writes the file once every effect has applied.
        self.modify(|world| world.apply_all(effects, |_| Ok(())))
    }
}
