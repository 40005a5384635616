//! Gambit, appeal, stage and judge catalog loaders.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::path::Path;

use contest_core::{
    AppealId, AppealProfile, GambitProfile, JudgeProfile, MonsterId, StageProfile, StatMap,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Rejects catalogs that list the same id twice.
fn ensure_unique<T, K>(entries: &[T], key: impl Fn(&T) -> K, what: &str) -> LoadResult<()>
where
    K: Eq + Hash + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for entry in entries {
        let id = key(entry);
        if seen.contains(&id) {
            anyhow::bail!("Duplicate {} id: {}", what, id);
        }
        seen.insert(id);
    }
    Ok(())
}

/// Rejects negative or non-finite factors.
fn ensure_non_negative(map: &StatMap, owner: &str) -> LoadResult<()> {
    for (kind, value) in map.iter() {
        if !value.is_finite() || value < 0.0 {
            anyhow::bail!("{}: {} factor must be a non-negative number, got {}", owner, kind, value);
        }
    }
    Ok(())
}

/// Gambit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GambitCatalog {
    pub gambits: Vec<GambitProfile>,
}

pub struct GambitLoader;

impl GambitLoader {
    /// Load the gambit catalog from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<GambitProfile>> {
        let catalog: GambitCatalog = read_ron(path, "gambit catalog")?;
        ensure_unique(&catalog.gambits, |gambit| gambit.id, "gambit")?;
        for gambit in &catalog.gambits {
            ensure_non_negative(&gambit.multipliers, gambit.id.as_ref())?;
        }
        Ok(catalog.gambits)
    }
}

/// Appeal catalog plus the monster assignment table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppealCatalog {
    pub appeals: Vec<AppealProfile>,
    /// Appeals per monster, most preferred first
    #[serde(default)]
    pub assignments: HashMap<MonsterId, Vec<AppealId>>,
}

pub struct AppealLoader;

impl AppealLoader {
    /// Load the appeal catalog from a RON file.
    ///
    /// Every assigned appeal must exist in the catalog.
    pub fn load(path: &Path) -> LoadResult<AppealCatalog> {
        let catalog: AppealCatalog = read_ron(path, "appeal catalog")?;
        ensure_unique(&catalog.appeals, |appeal| appeal.id, "appeal")?;
        for appeal in &catalog.appeals {
            ensure_non_negative(&appeal.multipliers, appeal.id.as_ref())?;
        }

        let known: HashSet<AppealId> = catalog.appeals.iter().map(|appeal| appeal.id).collect();
        for (monster, appeals) in &catalog.assignments {
            if let Some(missing) = appeals.iter().find(|id| !known.contains(*id)) {
                anyhow::bail!("Monster {} is assigned unknown appeal {}", monster, missing);
            }
        }

        Ok(catalog)
    }
}

/// Stage catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCatalog {
    pub stages: Vec<StageProfile>,
}

pub struct StageLoader;

impl StageLoader {
    /// Load the stage catalog from a RON file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<StageProfile>> {
        let catalog: StageCatalog = read_ron(path, "stage catalog")?;
        ensure_unique(&catalog.stages, |stage| stage.id, "stage")?;
        for stage in &catalog.stages {
            ensure_non_negative(&stage.bias, stage.id.as_ref())?;
        }
        Ok(catalog.stages)
    }
}

/// Judge catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeCatalog {
    pub judges: Vec<JudgeProfile>,
}

pub struct JudgeLoader;

impl JudgeLoader {
    /// Load the judge catalog from a RON file, in file order.
    ///
    /// Judge weights must be non-negative.
    pub fn load(path: &Path) -> LoadResult<Vec<JudgeProfile>> {
        let catalog: JudgeCatalog = read_ron(path, "judge catalog")?;
        ensure_unique(&catalog.judges, |judge| judge.id, "judge")?;
        for judge in &catalog.judges {
            ensure_non_negative(&judge.weights, judge.id.as_ref())?;
        }
        Ok(catalog.judges)
    }
}
