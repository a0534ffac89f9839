//! Content loaders for reading battle data from files.
//!
//! Every loader has a `load(path)` entry point and a `parse(str)` entry
//! point; the embedded defaults go through the latter.

pub mod config;
pub mod factory;
pub mod roster;
pub mod ruleset;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use roster::RosterLoader;
pub use ruleset::RulesetLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
