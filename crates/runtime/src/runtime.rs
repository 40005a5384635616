//! High-level evaluation facade.
//!
//! The runtime owns the loaded oracles and exposes a builder-based API for
//! clients to resolve selections and score them.

use contest_content::ConfigOverrides;
use contest_core::{ContestConfig, ContestEngine, Evaluation, JudgeOracle, StageOracle};

use crate::api::{Result, RuntimeError};
use crate::oracle::{ContentOracleFactory, OracleManager};

/// Main runtime that evaluates contest selections.
///
/// Oracles are shared behind `Arc`s, so cloning a runtime is cheap.
#[derive(Clone)]
pub struct Runtime {
    oracles: OracleManager,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Build a runtime from the content in `factory`'s data directory.
    pub fn from_content(factory: &ContentOracleFactory) -> Result<Self> {
        Self::builder().oracles(factory.build()?).build()
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Default selection: the first monster in the roster with the first
    /// three stages and judges of the catalogs.
    pub fn default_config(&self) -> Result<ContestConfig> {
        let monster = self
            .oracles
            .roster()
            .first()
            .ok_or(RuntimeError::EmptyRoster)?;

        let stages = contest_core::config::slots_from(
            self.oracles
                .stages()
                .stages()
                .into_iter()
                .map(|stage| Some(stage.id)),
        );
        let judges = contest_core::config::slots_from(
            self.oracles
                .judges()
                .judges()
                .into_iter()
                .map(|judge| Some(judge.id)),
        );

        Ok(ContestConfig::new(monster.id.clone())
            .with_stages(stages)
            .with_judges(judges))
    }

    /// Default selection with `overrides` applied on top.
    pub fn resolve(&self, overrides: &ConfigOverrides) -> Result<ContestConfig> {
        Ok(overrides.apply_to(self.default_config()?))
    }

    /// Score a selection.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Evaluate`] when the monster is not in the roster.
    pub fn evaluate(&self, config: &ContestConfig) -> Result<Evaluation> {
        tracing::debug!(
            monster = %config.monster,
            nature = %config.nature,
            mood = %config.mood,
            appeal_uses = config.appeal_uses,
            "evaluating contest selection"
        );

        let engine = ContestEngine::new(self.oracles.as_contest_env());
        let evaluation = engine.evaluate(config).inspect_err(|err| {
            tracing::warn!(monster = %config.monster, error = %err, "evaluation failed");
        })?;

        tracing::info!(
            monster = %evaluation.monster.template.id,
            stages = evaluation.sheet.valid_stage_count(),
            total = evaluation.sheet.grand_total,
            average = evaluation.average(),
            "contest evaluated"
        );

        Ok(evaluation)
    }

    /// Resolve `overrides` against the defaults and score the result.
    pub fn evaluate_overrides(&self, overrides: &ConfigOverrides) -> Result<Evaluation> {
        let config = self.resolve(overrides)?;
        self.evaluate(&config)
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    oracles: Option<OracleManager>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        if oracles.roster().is_empty() {
            return Err(RuntimeError::EmptyRoster);
        }
        Ok(Runtime { oracles })
    }
}
