//! Reference table loader.

use std::path::Path;

use crate::catalog::ReferenceCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the race/armor/weapon catalog from RON files.
pub struct ReferenceLoader;

impl ReferenceLoader {
    /// Load the reference catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when a name appears
    /// twice in the same table (lookups must resolve to exactly one row).
    pub fn load(path: &Path) -> LoadResult<ReferenceCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ReferenceCatalog> {
        let catalog: ReferenceCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reference catalog RON: {}", e))?;

        if let Some((table, name)) = catalog.find_duplicate() {
            anyhow::bail!("Duplicate entry '{}' in {}", name, table);
        }

        Ok(catalog)
    }
}
