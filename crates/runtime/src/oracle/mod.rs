//! Runtime wrappers around static contest content.
//!
//! These implementations expose `contest-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`contest_core::Env`]
//! views on demand. The data is immutable once loaded.
mod content;
mod roster;
mod tables;

use contest_core::{ContestEnv, Env};
use std::sync::Arc;

pub use content::ContentOracleFactory;
pub use roster::RosterOracleImpl;
pub use tables::{AppealOracleImpl, GambitOracleImpl, JudgeOracleImpl, StageOracleImpl};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) roster: Arc<RosterOracleImpl>,
    pub(crate) gambits: Arc<GambitOracleImpl>,
    pub(crate) appeals: Arc<AppealOracleImpl>,
    pub(crate) stages: Arc<StageOracleImpl>,
    pub(crate) judges: Arc<JudgeOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        roster: Arc<RosterOracleImpl>,
        gambits: Arc<GambitOracleImpl>,
        appeals: Arc<AppealOracleImpl>,
        stages: Arc<StageOracleImpl>,
        judges: Arc<JudgeOracleImpl>,
    ) -> Self {
        Self {
            roster,
            gambits,
            appeals,
            stages,
            judges,
        }
    }

    /// Converts oracle manager into ContestEnv for contest-core
    pub fn as_contest_env(&self) -> ContestEnv<'_> {
        Env::with_all(
            self.roster.as_ref(),
            self.gambits.as_ref(),
            self.appeals.as_ref(),
            self.stages.as_ref(),
            self.judges.as_ref(),
        )
        .into_contest_env()
    }

    pub fn roster(&self) -> &RosterOracleImpl {
        &self.roster
    }

    pub fn gambits(&self) -> &GambitOracleImpl {
        &self.gambits
    }

    pub fn appeals(&self) -> &AppealOracleImpl {
        &self.appeals
    }

    pub fn stages(&self) -> &StageOracleImpl {
        &self.stages
    }

    pub fn judges(&self) -> &JudgeOracleImpl {
        &self.judges
    }
}
