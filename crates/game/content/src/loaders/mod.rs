//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into the types defined in
//! [`crate::catalog`] or in `warband-core`.

pub mod config;
pub mod factory;
pub mod reference;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use reference::ReferenceLoader;
pub use world::WorldLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
