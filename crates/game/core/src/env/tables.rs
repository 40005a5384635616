//! Oracles providing the modifier and scoring catalogs.
//!
//! Every lookup is total: an identifier missing from the catalog yields
//! `None`, which callers treat as an empty slot.

use super::roster::MonsterId;
use crate::scoring::{JudgeId, JudgeProfile, StageId, StageProfile};
use crate::stats::{AppealId, AppealProfile, GambitId, GambitProfile};

pub trait GambitOracle: Send + Sync {
    fn gambit(&self, id: GambitId) -> Option<GambitProfile>;

    /// Returns all gambits in catalog order.
    fn gambits(&self) -> Vec<GambitProfile>;
}

/// Appeal catalog plus the table assigning appeals to monsters.
pub trait AppealOracle: Send + Sync {
    fn appeal(&self, id: AppealId) -> Option<AppealProfile>;

    /// Returns all appeals in catalog order.
    fn appeals(&self) -> Vec<AppealProfile>;

    /// Appeals assigned to `monster`, most preferred first.
    fn appeals_for(&self, monster: &MonsterId) -> Vec<AppealId>;

    /// The monster's first assigned appeal, if it has one.
    fn default_appeal(&self, monster: &MonsterId) -> Option<AppealProfile> {
        self.appeals_for(monster)
            .first()
            .and_then(|id| self.appeal(*id))
    }
}

pub trait StageOracle: Send + Sync {
    fn stage(&self, id: StageId) -> Option<StageProfile>;

    /// Returns all stages in catalog order.
    fn stages(&self) -> Vec<StageProfile>;
}

pub trait JudgeOracle: Send + Sync {
    fn judge(&self, id: JudgeId) -> Option<JudgeProfile>;

    /// Returns all judges in catalog order.
    fn judges(&self) -> Vec<JudgeProfile>;
}
