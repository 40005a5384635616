//! Content factory for loading every catalog from a data directory.

use std::path::{Path, PathBuf};

use contest_core::{GambitProfile, JudgeProfile, MonsterTemplate, StageProfile};

use crate::loaders::{
    AppealCatalog, AppealLoader, ConfigLoader, ConfigOverrides, GambitLoader, JudgeLoader,
    LoadResult, RosterLoader, StageLoader,
};

/// Content factory that loads all contest content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── monsters.ron
/// ├── gambits.ron
/// ├── appeals.ron
/// ├── stages.ron
/// └── judges.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the default selection from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ConfigOverrides> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load the monster roster from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<Vec<MonsterTemplate>> {
        RosterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Load the gambit catalog from `gambits.ron`.
    pub fn load_gambits(&self) -> LoadResult<Vec<GambitProfile>> {
        GambitLoader::load(&self.data_dir.join("gambits.ron"))
    }

    /// Load appeals and their assignments from `appeals.ron`.
    pub fn load_appeals(&self) -> LoadResult<AppealCatalog> {
        AppealLoader::load(&self.data_dir.join("appeals.ron"))
    }

    /// Load the stage catalog from `stages.ron`.
    pub fn load_stages(&self) -> LoadResult<Vec<StageProfile>> {
        StageLoader::load(&self.data_dir.join("stages.ron"))
    }

    /// Load the judge catalog from `judges.ron`.
    pub fn load_judges(&self) -> LoadResult<Vec<JudgeProfile>> {
        JudgeLoader::load(&self.data_dir.join("judges.ron"))
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
