//! In-memory gambit, appeal, stage and judge oracles.
//!
//! Each catalog keeps its entries in load order for listing and an index for
//! lookup by id.

use std::collections::HashMap;
use std::hash::Hash;

use contest_core::{
    AppealId, AppealOracle, AppealProfile, GambitId, GambitOracle, GambitProfile, JudgeId,
    JudgeOracle, JudgeProfile, MonsterId, StageId, StageOracle, StageProfile,
};

/// Ordered catalog with id lookup.
#[derive(Debug, Clone)]
struct Catalog<K, V> {
    entries: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash, V: Clone> Catalog<K, V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts `value`; an existing entry with the same key is replaced in place.
    fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position] = value,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(value);
            }
        }
    }

    fn get(&self, key: K) -> Option<V> {
        self.index
            .get(&key)
            .and_then(|&position| self.entries.get(position))
            .cloned()
    }

    fn all(&self) -> Vec<V> {
        self.entries.clone()
    }
}

/// GambitOracle implementation with static gambit profiles
#[derive(Debug, Clone)]
pub struct GambitOracleImpl {
    catalog: Catalog<GambitId, GambitProfile>,
}

impl GambitOracleImpl {
    pub fn new(gambits: impl IntoIterator<Item = GambitProfile>) -> Self {
        let mut catalog = Catalog::new();
        for gambit in gambits {
            catalog.insert(gambit.id, gambit);
        }
        Self { catalog }
    }
}

impl GambitOracle for GambitOracleImpl {
    fn gambit(&self, id: GambitId) -> Option<GambitProfile> {
        self.catalog.get(id)
    }

    fn gambits(&self) -> Vec<GambitProfile> {
        self.catalog.all()
    }
}

/// AppealOracle implementation with static appeals and monster assignments
#[derive(Debug, Clone)]
pub struct AppealOracleImpl {
    catalog: Catalog<AppealId, AppealProfile>,
    assignments: HashMap<MonsterId, Vec<AppealId>>,
}

impl AppealOracleImpl {
    pub fn new(
        appeals: impl IntoIterator<Item = AppealProfile>,
        assignments: HashMap<MonsterId, Vec<AppealId>>,
    ) -> Self {
        let mut catalog = Catalog::new();
        for appeal in appeals {
            catalog.insert(appeal.id, appeal);
        }
        Self {
            catalog,
            assignments,
        }
    }

    /// Assign `appeals` to `monster`, replacing any previous assignment
    pub fn assign(&mut self, monster: MonsterId, appeals: Vec<AppealId>) {
        self.assignments.insert(monster, appeals);
    }
}

impl AppealOracle for AppealOracleImpl {
    fn appeal(&self, id: AppealId) -> Option<AppealProfile> {
        self.catalog.get(id)
    }

    fn appeals(&self) -> Vec<AppealProfile> {
        self.catalog.all()
    }

    fn appeals_for(&self, monster: &MonsterId) -> Vec<AppealId> {
        self.assignments.get(monster).cloned().unwrap_or_default()
    }
}

/// StageOracle implementation with static stage profiles
#[derive(Debug, Clone)]
pub struct StageOracleImpl {
    catalog: Catalog<StageId, StageProfile>,
}

impl StageOracleImpl {
    pub fn new(stages: impl IntoIterator<Item = StageProfile>) -> Self {
        let mut catalog = Catalog::new();
        for stage in stages {
            catalog.insert(stage.id, stage);
        }
        Self { catalog }
    }
}

impl StageOracle for StageOracleImpl {
    fn stage(&self, id: StageId) -> Option<StageProfile> {
        self.catalog.get(id)
    }

    fn stages(&self) -> Vec<StageProfile> {
        self.catalog.all()
    }
}

/// JudgeOracle implementation with static judge profiles
#[derive(Debug, Clone)]
pub struct JudgeOracleImpl {
    catalog: Catalog<JudgeId, JudgeProfile>,
}

impl JudgeOracleImpl {
    pub fn new(judges: impl IntoIterator<Item = JudgeProfile>) -> Self {
        let mut catalog = Catalog::new();
        for judge in judges {
            catalog.insert(judge.id, judge);
        }
        Self { catalog }
    }
}

impl JudgeOracle for JudgeOracleImpl {
    fn judge(&self, id: JudgeId) -> Option<JudgeProfile> {
        self.catalog.get(id)
    }

    fn judges(&self) -> Vec<JudgeProfile> {
        self.catalog.all()
    }
}

#[cfg(test)]
mod tests {
    use contest_core::{StatKind, StatMap};

    use super::*;

    #[test]
    fn later_entries_replace_earlier_ones_in_place() {
        let oracle = StageOracleImpl::new([
            StageProfile::new(StageId::Standard, "Standard", "", StatMap::empty()),
            StageProfile::new(StageId::WildShowStage, "Wild", "", StatMap::empty()),
            StageProfile::new(
                StageId::Standard,
                "Standard v2",
                "",
                StatMap::empty().with(StatKind::Cute, 1.1),
            ),
        ]);

        let names: Vec<_> = oracle.stages().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Standard v2", "Wild"]);
        assert_eq!(
            oracle.stage(StageId::Standard).map(|s| s.bias_for(StatKind::Cute)),
            Some(1.1)
        );
        assert!(oracle.stage(StageId::SpookyCuteStage).is_none());
    }

    #[test]
    fn default_appeal_is_first_assignment() {
        let mut oracle = AppealOracleImpl::new(
            [
                AppealProfile::new(AppealId::ThrowKiss, "Blown Kiss", "", StatMap::empty()),
                AppealProfile::new(AppealId::SpinTurn, "Twirl Turn", "", StatMap::empty()),
            ],
            HashMap::new(),
        );
        let muse = MonsterId::from("muse_idol_fairy");
        assert!(oracle.default_appeal(&muse).is_none());

        oracle.assign(muse.clone(), vec![AppealId::SpinTurn, AppealId::ThrowKiss]);
        assert_eq!(
            oracle.default_appeal(&muse).map(|a| a.id),
            Some(AppealId::SpinTurn)
        );
    }
}
