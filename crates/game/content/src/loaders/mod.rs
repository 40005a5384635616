//! Content loaders for reading contest data from files.
//!
//! Catalogs are RON files deserialized straight into `contest-core` types;
//! the default selection is a TOML file.

pub mod config;
pub mod factory;
pub mod roster;
pub mod tables;

pub use config::{ConfigLoader, ConfigOverrides, parse_slots};
pub use factory::ContentFactory;
pub use roster::RosterLoader;
pub use tables::{AppealCatalog, AppealLoader, GambitLoader, JudgeLoader, StageLoader};

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses a RON file; `what` names the content in error messages.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e))
}
