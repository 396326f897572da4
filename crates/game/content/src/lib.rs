//! Data-driven content definitions and loaders.
//!
//! This crate houses the read-only data a battle consumes and provides
//! loaders for RON/TOML data files:
//! - Reference tables: races, armors and weapons (RON)
//! - Battle configuration (TOML)
//! - World seed rosters used to populate an empty store (RON)
//!
//! Reference rows are consumed by runtime oracles and never appear in battle
//! state. A default data set ships in this crate's `data/` directory.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ReferenceCatalog, SquadSeed, UnitSeed, WorldSeed};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ReferenceLoader, WorldLoader};

/// Path of the data set bundled with this crate.
pub fn bundled_data_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
