//! [`warband_core::TablesOracle`] backed by an in-memory map.

use std::collections::HashMap;

use warband_core::{RaceStats, TablesOracle};

/// TablesOracle implementation with static race rows.
#[derive(Debug, Clone, Default)]
pub struct TablesOracleImpl {
    races: HashMap<String, RaceStats>,
}

impl TablesOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_races(races: impl IntoIterator<Item = RaceStats>) -> Self {
        let mut tables = Self::new();
        for race in races {
            tables.add_race(race);
        }
        tables
    }

    /// Add a race row, replacing any row with the same name.
    pub fn add_race(&mut self, race: RaceStats) {
        self.races.insert(race.name.clone(), race);
    }
}

impl TablesOracle for TablesOracleImpl {
    fn race(&self, name: &str) -> Option<RaceStats> {
        self.races.get(name).cloned()
    }
}
