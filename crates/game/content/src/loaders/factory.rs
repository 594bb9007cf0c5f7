//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use echo_core::BattleConfig;

use crate::CharacterCatalog;
use crate::loaders::{CharacterLoader, ConfigLoader, LoadResult};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── characters.ron
/// ```
///
/// Either file may be absent, in which case the embedded copy is used.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return ConfigLoader::embedded();
        }
        ConfigLoader::load(&path)
    }

    /// Load the character catalog from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<CharacterCatalog> {
        let path = self.data_dir.join("characters.ron");
        if !path.exists() {
            return CharacterLoader::embedded();
        }
        CharacterLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.data_dir(), dir.path());
        assert_eq!(factory.load_config().unwrap(), BattleConfig::default());
        assert_eq!(factory.load_characters().unwrap().len(), 4);
    }

    #[test]
    fn files_in_dir_override_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "mp_regen_per_turn = 0\n").unwrap();
        std::fs::write(
            dir.path().join("characters.ron"),
            r#"[("rat", (name: "Rat", stats: (max_hp: 5, max_mp: 0, attack: 2, defense: 0, speed: 12, magic_power: 0), skills: [attack]))]"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().mp_regen_per_turn, 0);

        let catalog = factory.load_characters().unwrap();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["rat"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("characters.ron"), "not ron").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_characters().is_err());
    }
}
