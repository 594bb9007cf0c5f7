//! Character catalog loader.
//!
//! RON format: `Vec<(String, CharacterTemplate)>`, where the string is the
//! lookup key (`"goblin"`, `"dark_knight"`, ...).

use std::collections::HashSet;
use std::path::Path;

use echo_core::CharacterTemplate;

use crate::CharacterCatalog;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CHARACTERS: &str = include_str!("../../data/characters.ron");

/// Loader for the character catalog from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<CharacterCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog from a RON string. Keys must be unique.
    pub fn parse(content: &str) -> LoadResult<CharacterCatalog> {
        let entries: Vec<(String, CharacterTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for (key, _) in &entries {
            if !seen.insert(key.as_str()) {
                anyhow::bail!("Duplicate character key '{}'", key);
            }
        }

        Ok(CharacterCatalog::from_entries(entries))
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> LoadResult<CharacterCatalog> {
        Self::parse(EMBEDDED_CHARACTERS)
    }
}
