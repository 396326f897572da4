//! Serializable content shapes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use warband_core::{ArmorStats, RaceStats, WeaponStats};

/// Race, armor and weapon reference rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    #[serde(default)]
    pub races: Vec<RaceStats>,
    #[serde(default)]
    pub armors: Vec<ArmorStats>,
    #[serde(default)]
    pub weapons: Vec<WeaponStats>,
}

impl ReferenceCatalog {
    /// Returns the first name listed twice within one table, as
    /// `(table, name)`.
    pub fn find_duplicate(&self) -> Option<(&'static str, &str)> {
        fn first_repeat<'a>(names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
            let mut seen = HashSet::new();
            names.into_iter().find(|name| !seen.insert(*name))
        }

        let races = self.races.iter().map(|r| r.name.as_str());
        let armors = self.armors.iter().map(|a| a.name.as_str());
        let weapons = self.weapons.iter().map(|w| w.name.as_str());

        first_repeat(races)
            .map(|name| ("races", name))
            .or_else(|| first_repeat(armors).map(|name| ("armors", name)))
            .or_else(|| first_repeat(weapons).map(|name| ("weapons", name)))
    }
}

/// A unit to create when seeding a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSeed {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    pub race: String,
    pub class: String,
    pub armor: String,
    pub weapon: String,
}

/// A squad and its units, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadSeed {
    pub name: String,
    pub commander: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub units: Vec<UnitSeed>,
}

/// Initial world content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSeed {
    pub squads: Vec<SquadSeed>,
}

fn default_level() -> u32 {
    1
}
