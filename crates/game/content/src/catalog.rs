//! Keyed character templates.

use echo_core::CharacterTemplate;

/// Ordered lookup table of character templates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterCatalog {
    entries: Vec<(String, CharacterTemplate)>,
}

impl CharacterCatalog {
    pub fn from_entries(entries: Vec<(String, CharacterTemplate)>) -> Self {
        Self { entries }
    }

    /// Built-in presets, available without the `loaders` feature.
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            ("hero".to_owned(), CharacterTemplate::hero("Hero")),
            ("slime".to_owned(), CharacterTemplate::slime()),
            ("goblin".to_owned(), CharacterTemplate::goblin()),
            ("dark_knight".to_owned(), CharacterTemplate::dark_knight()),
        ])
    }

    pub fn get(&self, key: &str) -> Option<&CharacterTemplate> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, template)| template)
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterTemplate)> {
        self.entries
            .iter()
            .map(|(key, template)| (key.as_str(), template))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
