//! Battle configuration loader.

use std::path::Path;

use echo_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !config.has_valid_variance() {
            anyhow::bail!(
                "damage_variance must be in [0, 1), got {}",
                config.damage_variance
            );
        }

        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> LoadResult<BattleConfig> {
        Self::parse(EMBEDDED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_matches_defaults() {
        assert_eq!(ConfigLoader::embedded().unwrap(), BattleConfig::default());
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("mp_regen_per_turn = 8").unwrap();
        assert_eq!(config.mp_regen_per_turn, 8);
        assert_eq!(config.damage_variance, BattleConfig::DEFAULT_DAMAGE_VARIANCE);
    }

    #[test]
    fn out_of_range_variance_is_rejected() {
        let err = ConfigLoader::parse("damage_variance = 1.5").unwrap_err();
        assert!(err.to_string().contains("damage_variance"));
    }

    #[test]
    fn variance_of_one_is_rejected() {
        assert!(ConfigLoader::parse("damage_variance = 1.0").is_err());
        let config = ConfigLoader::parse("damage_variance = 0.99").unwrap();
        assert!(config.has_valid_variance());
    }

    #[test]
    fn load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        let err = ConfigLoader::load(&missing).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
