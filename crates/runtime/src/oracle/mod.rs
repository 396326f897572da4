//! Runtime wrappers around static battle content oracles.
//!
//! These implementations expose `warband-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`warband_core::Env`]
//! snapshots on demand. The data is immutable at runtime; squads and units
//! live in repositories.
mod items;
mod tables;

use std::sync::Arc;

use warband_content::ReferenceCatalog;
use warband_core::{BattleEnv, Env, ItemOracle, PcgRng, RngOracle, TablesOracle};

pub use items::ItemOracleImpl;
pub use tables::TablesOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    items: Arc<ItemOracleImpl>,
    tables: Arc<TablesOracleImpl>,
    rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager drawing from [`PcgRng`].
    pub fn new(items: Arc<ItemOracleImpl>, tables: Arc<TablesOracleImpl>) -> Self {
        Self {
            items,
            tables,
            rng: Arc::new(PcgRng),
        }
    }

    /// Builds oracles from a loaded reference catalog.
    pub fn from_catalog(catalog: &ReferenceCatalog) -> Self {
        let tables = TablesOracleImpl::from_races(catalog.races.iter().cloned());

        let mut items = ItemOracleImpl::new();
        for armor in &catalog.armors {
            items.add_armor(armor.clone());
        }
        for weapon in &catalog.weapons {
            items.add_weapon(weapon.clone());
        }

        Self::new(Arc::new(items), Arc::new(tables))
    }

    /// Replaces the random source, e.g. with a scripted one in tests.
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// Converts oracle manager into a BattleEnv for warband-core
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        let tables: &dyn TablesOracle = self.tables.as_ref();
        let items: &dyn ItemOracle = self.items.as_ref();
        let rng: &dyn RngOracle = self.rng.as_ref();
        Env::with_all(tables, items, rng)
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager")
            .field("items", &self.items)
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}
