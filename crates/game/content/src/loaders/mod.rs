//! Content loaders for reading battle data from files.
//!
//! Every loader accepts either a path or a string, and the default data set
//! is compiled into the crate so a binary runs without a data directory.

pub mod characters;
pub mod config;
pub mod factory;

pub use characters::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
