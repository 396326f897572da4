#![allow(dead_code)]

use std::sync::Arc;

use warband_content::{ContentFactory, ReferenceCatalog, SquadSeed, UnitSeed};
use warband_core::{ArmorStats, BattleConfig, RaceStats, RngOracle, WeaponStats};
use warband_runtime::{Arena, ArenaConfig, ArenaStore, OracleManager};

/// Races with round numbers so expected damage is easy to read.
pub fn catalog() -> ReferenceCatalog {
    ReferenceCatalog {
        races: vec![
            // speed 10, 20 HP, attack bonus 5 with bare fists
            RaceStats::new("Swift", 20, 10, 5),
            // speed 5, 15 HP, attack bonus 3 with bare fists
            RaceStats::new("Slow", 15, 5, 3),
        ],
        armors: vec![ArmorStats::new("None", None, 0)],
        weapons: vec![WeaponStats::new("Fists", 0)],
    }
}

pub fn unit(name: &str, race: &str) -> UnitSeed {
    UnitSeed {
        name: name.into(),
        level: 1,
        race: race.into(),
        class: "Brawler".into(),
        armor: "None".into(),
        weapon: "Fists".into(),
    }
}

pub fn squad(name: &str, units: Vec<UnitSeed>) -> SquadSeed {
    SquadSeed {
        name: name.into(),
        commander: "Tester".into(),
        description: format!("{name} test squad"),
        level: 1,
        units,
    }
}

pub fn arena(store: Arc<dyn ArenaStore>, rng: Option<Arc<dyn RngOracle>>) -> Arena {
    let mut oracles = OracleManager::from_catalog(&catalog());
    if let Some(rng) = rng {
        oracles = oracles.with_rng(rng);
    }
    Arena::builder()
        .oracles(oracles)
        .shared_store(store)
        .build()
        .expect("arena should build")
}

/// Arena over the bundled reference data, with its world seeded.
pub fn bundled_arena(store: Arc<dyn ArenaStore>, battle: BattleConfig) -> Arena {
    let factory = ContentFactory::bundled();
    let reference = factory.load_reference().expect("bundled reference data");
    let world = factory.load_world().expect("bundled world");

    let arena = Arena::builder()
        .config(ArenaConfig {
            battle,
            ..ArenaConfig::default()
        })
        .oracles(OracleManager::from_catalog(&reference))
        .shared_store(store)
        .build()
        .expect("arena should build");
    arena.seed_world(&world).expect("seeding should succeed");
    arena
}
