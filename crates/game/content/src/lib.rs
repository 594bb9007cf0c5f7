//! Data-driven battle content and loaders.
//!
//! This crate houses the character roster and battle tuning:
//! - Character templates (data-driven via RON)
//! - Battle configuration (data-driven via TOML)
//!
//! The default data set is embedded, so loaders work without a data
//! directory. Content feeds the engine at construction time and never
//! changes during a battle.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::CharacterCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{CharacterLoader, ConfigLoader, ContentFactory, LoadResult};
