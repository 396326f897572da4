//! Battle configuration loader.

use std::path::Path;

use warband_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`BattleConfig`] from a TOML file. Missing keys take their
    /// defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse battle config TOML: {}", e))?;

        if config.attack_die == 0 || config.defense_die == 0 {
            anyhow::bail!("Dice must have at least one side");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("max_rounds = 50\nseed = 9\n").unwrap();

        assert_eq!(config.attack_die, BattleConfig::DEFAULT_DIE_SIDES);
        assert_eq!(config.max_rounds, 50);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn zero_sided_die_is_rejected() {
        assert!(ConfigLoader::parse("attack_die = 0").is_err());
    }
}
