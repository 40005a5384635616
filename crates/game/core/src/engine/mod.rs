//! Contest evaluation.
//!
//! The [`ContestEngine`] resolves a [`ContestConfig`] against the oracles,
//! runs the stat pipeline and scores the result. Evaluation is a pure
//! function of the configuration and the catalogs: the engine holds no state
//! between calls and the same input always yields the same [`Evaluation`].

mod errors;

pub use errors::EvaluateError;

use crate::config::{ContestConfig, Slots};
use crate::env::ContestEnv;
use crate::instance::MonsterInstance;
use crate::scoring::{JudgeProfile, ScoreSheet, StageProfile, aggregate};
use crate::stats::{AppealUse, GambitChain, StatVector, StatsSnapshot};

/// Complete outcome of one evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Template, personality and mood
    pub monster: MonsterInstance,

    /// Gambit slots as resolved; unknown ids are `None`
    pub gambits: GambitChain,

    /// The monster's appeal (if it has one) and the use count
    pub appeal: AppealUse,

    pub stages: Slots<StageProfile>,
    pub judges: Slots<JudgeProfile>,

    /// Stats after every pipeline layer
    pub stats: StatsSnapshot,

    pub sheet: ScoreSheet,
}

impl Evaluation {
    /// The vector the judges scored.
    pub fn final_stats(&self) -> StatVector {
        self.stats.final_stats
    }

    pub fn average(&self) -> f64 {
        self.sheet.average
    }
}

/// Evaluates contest configurations against a set of oracles.
pub struct ContestEngine<'a> {
    env: ContestEnv<'a>,
}

impl<'a> ContestEngine<'a> {
    pub fn new(env: ContestEnv<'a>) -> Self {
        Self { env }
    }

    /// Resolves every selection in `config` and scores the monster.
    ///
    /// # Errors
    ///
    /// - `EvaluateError::Oracle` if a required oracle is missing
    /// - `EvaluateError::MonsterNotFound` if the monster id is not in the roster
    pub fn evaluate(&self, config: &ContestConfig) -> Result<Evaluation, EvaluateError> {
        let template = self
            .env
            .roster()?
            .template(&config.monster)
            .ok_or_else(|| EvaluateError::MonsterNotFound(config.monster.clone()))?;

        let gambit_oracle = self.env.gambits()?;
        let gambits = GambitChain::from_slots(
            config
                .gambits
                .iter()
                .map(|slot| slot.and_then(|id| gambit_oracle.gambit(id))),
        );

        let appeal = AppealUse::new(
            self.env.appeals()?.default_appeal(&config.monster),
            config.appeal_uses,
        );

        let stage_oracle = self.env.stages()?;
        let stages = config.stages.map(|slot| slot.and_then(|id| stage_oracle.stage(id)));

        let judge_oracle = self.env.judges()?;
        let judges = config.judges.map(|slot| slot.and_then(|id| judge_oracle.judge(id)));

        let monster = MonsterInstance::new(template, config.nature, config.mood);
        let stats = StatsSnapshot::create(
            &monster.template.base_stats,
            config.nature,
            &gambits,
            &appeal,
        );
        let sheet = aggregate(&stats.final_stats, &stages, &judges);

        Ok(Evaluation {
            monster,
            gambits,
            appeal,
            stages,
            judges,
            stats,
            sheet,
        })
    }
}
