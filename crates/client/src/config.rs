//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Paths and overrides needed to assemble an arena.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `reference.ron`, `battle.toml` and `world.ron`.
    pub data_dir: PathBuf,
    /// JSON document backing the file store.
    pub store_path: PathBuf,
    pub log_dir: PathBuf,
    /// Overrides the seed from `battle.toml` when set.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: warband_content::bundled_data_dir(),
            store_path: default_data_dir().join("world.json"),
            log_dir: default_log_dir(),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARBAND_DATA_DIR` - Content directory (default: bundled data)
    /// - `WARBAND_STORE` - World store file (default: platform data dir)
    /// - `WARBAND_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `WARBAND_SEED` - Fixed battle seed (default: random per battle)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("WARBAND_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(path) = read_env::<PathBuf>("WARBAND_STORE") {
            config.store_path = path;
        }
        if let Some(dir) = read_env::<PathBuf>("WARBAND_LOG_DIR") {
            config.log_dir = dir;
        }
        config.seed = read_env::<u64>("WARBAND_SEED");

        config
    }
}

/// Platform data directory, falling back to `./save_data`.
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "warband")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory plus `logs`, falling back to `/tmp/warband/logs`.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "warband")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/warband"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_content() {
        let config = ClientConfig::default();

        assert!(config.data_dir.join("reference.ron").exists());
        assert!(config.store_path.ends_with("world.json"));
        assert!(config.log_dir.ends_with("logs"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn unset_variables_read_as_none() {
        assert_eq!(read_env::<u64>("WARBAND_TEST_SURELY_UNSET_VARIABLE"), None);
    }
}
