//! Builds an [`OracleManager`] from the shipped content files.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use contest_content::{ConfigOverrides, ContentFactory};

use super::{
    AppealOracleImpl, GambitOracleImpl, JudgeOracleImpl, OracleManager, RosterOracleImpl,
    StageOracleImpl,
};
use crate::api::{Result, RuntimeError};

const DATA_DIR_ENV: &str = "CONTENT_DATA_DIR";
const RELATIVE_DATA_DIR: &str = "crates/game/content/data";

/// Oracle factory that loads contest content from data files.
///
/// The data directory must contain `monsters.ron`, `gambits.ron`,
/// `appeals.ron`, `stages.ron`, `judges.ron` and `config.toml`.
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Locate the data directory.
    ///
    /// Tried in order:
    /// 1. `CONTENT_DATA_DIR` environment variable
    /// 2. Relative to the current executable (`target/<profile>/` three levels up)
    /// 3. Relative to the current directory
    pub fn default_paths() -> Self {
        if let Ok(env_dir) = std::env::var(DATA_DIR_ENV) {
            return Self::new(env_dir);
        }

        let from_exe = std::env::current_exe().ok().and_then(|exe| {
            exe.ancestors()
                .nth(3)
                .map(|root| root.join(RELATIVE_DATA_DIR))
                .filter(|dir| dir.is_dir())
        });

        let data_dir = from_exe.unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(RELATIVE_DATA_DIR)
        });

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every catalog and wrap them in oracles.
    pub fn build(&self) -> Result<OracleManager> {
        let factory = self.content()?;
        let dir = self.data_dir.display();

        let monsters = factory
            .load_monsters()
            .with_context(|| format!("failed to load monsters.ron from {dir}"))?;
        if monsters.is_empty() {
            return Err(RuntimeError::EmptyRoster);
        }
        let gambits = factory
            .load_gambits()
            .with_context(|| format!("failed to load gambits.ron from {dir}"))?;
        let appeals = factory
            .load_appeals()
            .with_context(|| format!("failed to load appeals.ron from {dir}"))?;
        let stages = factory
            .load_stages()
            .with_context(|| format!("failed to load stages.ron from {dir}"))?;
        let judges = factory
            .load_judges()
            .with_context(|| format!("failed to load judges.ron from {dir}"))?;

        tracing::debug!(
            data_dir = %dir,
            monsters = monsters.len(),
            gambits = gambits.len(),
            appeals = appeals.appeals.len(),
            stages = stages.len(),
            judges = judges.len(),
            "loaded contest content"
        );

        Ok(OracleManager::new(
            Arc::new(RosterOracleImpl::from_templates(monsters)),
            Arc::new(GambitOracleImpl::new(gambits)),
            Arc::new(AppealOracleImpl::new(appeals.appeals, appeals.assignments)),
            Arc::new(StageOracleImpl::new(stages)),
            Arc::new(JudgeOracleImpl::new(judges)),
        ))
    }

    /// Load the default selection from `config.toml`.
    ///
    /// A missing file is not an error; the built-in defaults apply.
    pub fn load_defaults(&self) -> Result<ConfigOverrides> {
        let factory = self.content()?;
        let path = factory.config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config.toml, using built-in defaults");
            return Ok(ConfigOverrides::default());
        }
        let overrides = factory
            .load_config()
            .with_context(|| format!("failed to load {}", path.display()))?;
        Ok(overrides)
    }

    fn content(&self) -> Result<ContentFactory> {
        if !self.data_dir.is_dir() {
            return Err(RuntimeError::DataDirNotFound {
                path: self.data_dir.clone(),
            });
        }
        Ok(ContentFactory::new(&self.data_dir))
    }
}
