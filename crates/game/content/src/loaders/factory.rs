//! Content factory bundling the loaders over one data directory.

use std::path::{Path, PathBuf};

use warband_core::BattleConfig;

use crate::catalog::{ReferenceCatalog, WorldSeed};
use crate::loaders::{ConfigLoader, LoadResult, ReferenceLoader, WorldLoader};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── reference.ron
/// └── world.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data set shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load battle configuration from `battle.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("battle.toml"))
    }

    /// Load race, armor and weapon tables from `reference.ron`.
    pub fn load_reference(&self) -> LoadResult<ReferenceCatalog> {
        ReferenceLoader::load(&self.data_dir.join("reference.ron"))
    }

    /// Load seed squads from `world.ron`.
    pub fn load_world(&self) -> LoadResult<WorldSeed> {
        WorldLoader::load(&self.data_dir.join("world.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_world_only_uses_known_references() {
        let factory = ContentFactory::bundled();
        let reference = factory.load_reference().unwrap();
        let world = factory.load_world().unwrap();
        factory.load_config().unwrap();

        let races: Vec<&str> = reference.races.iter().map(|r| r.name.as_str()).collect();
        let armors: Vec<&str> = reference.armors.iter().map(|a| a.name.as_str()).collect();
        let weapons: Vec<&str> = reference.weapons.iter().map(|w| w.name.as_str()).collect();

        for unit in world.squads.iter().flat_map(|s| &s.units) {
            assert!(races.contains(&unit.race.as_str()), "{}", unit.race);
            assert!(armors.contains(&unit.armor.as_str()), "{}", unit.armor);
            assert!(weapons.contains(&unit.weapon.as_str()), "{}", unit.weapon);
        }
        assert!(world.squads.len() >= 2);
    }
}
