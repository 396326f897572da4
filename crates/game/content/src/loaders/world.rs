//! World seed loader.

use std::path::Path;

use crate::catalog::WorldSeed;
use crate::loaders::{LoadResult, read_file};

/// Loader for the squads used to populate an empty store.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldSeed> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WorldSeed> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse world seed RON: {}", e))
    }
}
