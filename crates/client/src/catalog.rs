//! Catalog listing for `contest catalog`.

use std::fmt;

use clap::ValueEnum;
use contest_core::stats::NatureModifier;
use contest_core::{
    AppealOracle, AppealProfile, GambitOracle, GambitProfile, JudgeOracle, JudgeProfile,
    MonsterPhase, MonsterTemplate, MoodId, NatureId, RosterOracle, StageOracle, StageProfile,
    StatMap,
};
use contest_runtime::OracleManager;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogSection {
    All,
    Monsters,
    Personalities,
    Moods,
    Gambits,
    Appeals,
    Stages,
    Judges,
}

impl CatalogSection {
    fn includes(self, other: CatalogSection) -> bool {
        self == CatalogSection::All || self == other
    }
}

/// Snapshot of the loaded catalogs, rendered as text through `Display` or
/// serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    #[serde(skip)]
    section: CatalogSection,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    monsters: Vec<MonsterTemplate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    personalities: Vec<NatureId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    moods: Vec<MoodId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    gambits: Vec<GambitProfile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    appeals: Vec<AppealProfile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stages: Vec<StageProfile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    judges: Vec<JudgeProfile>,
}

impl CatalogListing {
    pub fn new(oracles: &OracleManager, section: CatalogSection) -> Self {
        fn pick<T>(wanted: bool, load: impl FnOnce() -> Vec<T>) -> Vec<T> {
            if wanted { load() } else { Vec::new() }
        }

        Self {
            section,
            monsters: pick(section.includes(CatalogSection::Monsters), || {
                oracles.roster().templates()
            }),
            personalities: pick(section.includes(CatalogSection::Personalities), || {
                NatureId::iter().collect()
            }),
            moods: pick(section.includes(CatalogSection::Moods), || {
                MoodId::iter().collect()
            }),
            gambits: pick(section.includes(CatalogSection::Gambits), || {
                oracles.gambits().gambits()
            }),
            appeals: pick(section.includes(CatalogSection::Appeals), || {
                oracles.appeals().appeals()
            }),
            stages: pick(section.includes(CatalogSection::Stages), || {
                oracles.stages().stages()
            }),
            judges: pick(section.includes(CatalogSection::Judges), || {
                oracles.judges().judges()
            }),
        }
    }

    fn write_monsters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monsters")?;
        for phase in MonsterPhase::iter() {
            let mut in_phase = self.monsters.iter().filter(|m| m.phase == phase).peekable();
            if in_phase.peek().is_none() {
                continue;
            }
            writeln!(f, "  {} phase", phase.label())?;
            for monster in in_phase {
                writeln!(
                    f,
                    "    No.{} {:<22} {:<20} {:<11} {}  stamina {}  ({})",
                    monster.catalog_label(),
                    monster.name,
                    monster.id.as_str(),
                    monster.archetype.label(),
                    monster.base_stats,
                    monster.stamina_max,
                    monster.unlock_condition.label(),
                )?;
            }
        }
        writeln!(f)
    }

    fn write_personalities(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Personalities")?;
        for nature in &self.personalities {
            writeln!(
                f,
                "  {:<10} {:<10} {}",
                nature.as_ref(),
                nature.label(),
                nature_multipliers(*nature).summary()
            )?;
        }
        writeln!(f)
    }

    fn write_moods(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moods")?;
        for mood in &self.moods {
            writeln!(
                f,
                "  {:<10} {:<10} {}",
                mood.as_ref(),
                mood.label(),
                mood.flavors().join(", ")
            )?;
        }
        writeln!(f)
    }

    fn write_gambits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gambits")?;
        for gambit in &self.gambits {
            writeln!(
                f,
                "  {:<18} {:<22} {}",
                gambit.id.as_ref(),
                gambit.name,
                gambit.multipliers.summary()
            )?;
        }
        writeln!(f)
    }

    fn write_appeals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appeals (per use)")?;
        for appeal in &self.appeals {
            writeln!(
                f,
                "  {:<18} {:<22} {}",
                appeal.id.as_ref(),
                appeal.name,
                appeal.multipliers.summary_without_neutral()
            )?;
        }
        writeln!(f)
    }

    fn write_stages(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stages")?;
        for stage in &self.stages {
            writeln!(
                f,
                "  {:<18} {:<22} {}",
                stage.id.as_ref(),
                stage.name,
                stage.bias_summary()
            )?;
        }
        writeln!(f)
    }

    fn write_judges(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Judges")?;
        for judge in &self.judges {
            writeln!(
                f,
                "  {:<18} {:<22} {}",
                judge.id.as_ref(),
                judge.name,
                judge.formula()
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = self.section;
        if section.includes(CatalogSection::Monsters) {
            self.write_monsters(f)?;
        }
        if section.includes(CatalogSection::Personalities) {
            self.write_personalities(f)?;
        }
        if section.includes(CatalogSection::Moods) {
            self.write_moods(f)?;
        }
        if section.includes(CatalogSection::Gambits) {
            self.write_gambits(f)?;
        }
        if section.includes(CatalogSection::Appeals) {
            self.write_appeals(f)?;
        }
        if section.includes(CatalogSection::Stages) {
            self.write_stages(f)?;
        }
        if section.includes(CatalogSection::Judges) {
            self.write_judges(f)?;
        }
        Ok(())
    }
}

/// Personality factors as a multiplier map; empty for the neutral personality.
pub fn nature_multipliers(nature: NatureId) -> StatMap {
    let modifier = nature.modifier();
    let mut map = StatMap::empty();
    if let Some(kind) = modifier.up {
        map = map.with(kind, NatureModifier::UP_FACTOR);
    }
    if let Some(kind) = modifier.down {
        map = map.with(kind, NatureModifier::DOWN_FACTOR);
    }
    map
}
