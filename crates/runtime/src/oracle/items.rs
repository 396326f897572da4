//! Minimal [`warband_core::ItemOracle`] backed by in-memory maps.
use std::collections::HashMap;

use warband_core::{ArmorStats, ItemOracle, WeaponStats};

/// ItemOracle implementation with static armor and weapon rows
#[derive(Debug, Clone, Default)]
pub struct ItemOracleImpl {
    armors: HashMap<String, ArmorStats>,
    weapons: HashMap<String, WeaponStats>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_armor(&mut self, armor: ArmorStats) {
        self.armors.insert(armor.name.clone(), armor);
    }

    pub fn add_weapon(&mut self, weapon: WeaponStats) {
        self.weapons.insert(weapon.name.clone(), weapon);
    }
}

impl ItemOracle for ItemOracleImpl {
    fn armor(&self, name: &str) -> Option<ArmorStats> {
        self.armors.get(name).cloned()
    }

    fn weapon(&self, name: &str) -> Option<WeaponStats> {
        self.weapons.get(name).cloned()
    }
}
