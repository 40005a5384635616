//! Contest selection loader.
//!
//! A selection file lists ids as plain strings so it can be edited by hand:
//!
//! ```toml
//! monster = "fenrir_adult"
//! nature = "daring"
//! gambits = ["cute_focus", "", "stage_finale"]
//! ```
//!
//! Every field is optional. Ids are resolved leniently: an unknown id is
//! logged and treated as an empty slot (or the neutral personality), never as
//! an error.

use std::path::Path;
use std::str::FromStr;

use contest_core::{ContestConfig, MonsterId, MoodId, NatureId, Slots};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Partial contest selection as written in a config file or on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub monster: Option<String>,
    pub nature: Option<String>,
    pub mood: Option<String>,
    pub gambits: Option<Vec<String>>,
    pub stages: Option<Vec<String>>,
    pub judges: Option<Vec<String>>,
    pub appeal_uses: Option<i32>,
}

impl ConfigOverrides {
    /// Layers `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: ConfigOverrides) -> Self {
        Self {
            monster: other.monster.or(self.monster),
            nature: other.nature.or(self.nature),
            mood: other.mood.or(self.mood),
            gambits: other.gambits.or(self.gambits),
            stages: other.stages.or(self.stages),
            judges: other.judges.or(self.judges),
            appeal_uses: other.appeal_uses.or(self.appeal_uses),
        }
    }

    /// Applies the set fields to `base`.
    ///
    /// An unknown personality falls back to the neutral one; an unknown mood
    /// keeps the mood of `base`. Slot lists are resolved with [`parse_slots`].
    pub fn apply_to(&self, mut base: ContestConfig) -> ContestConfig {
        if let Some(monster) = &self.monster {
            base.monster = MonsterId::from(monster.trim());
        }
        if let Some(nature) = &self.nature {
            base.nature = nature.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(id = %nature, "unknown personality, using neutral");
                NatureId::Natural
            });
        }
        if let Some(mood) = &self.mood {
            match mood.trim().parse::<MoodId>() {
                Ok(parsed) => base.mood = parsed,
                Err(_) => tracing::warn!(id = %mood, "unknown mood, keeping {}", base.mood),
            }
        }
        if let Some(gambits) = &self.gambits {
            base.gambits = parse_slots("gambit", gambits);
        }
        if let Some(stages) = &self.stages {
            base.stages = parse_slots("stage", stages);
        }
        if let Some(judges) = &self.judges {
            base.judges = parse_slots("judge", judges);
        }
        if let Some(uses) = self.appeal_uses {
            base.appeal_uses = uses;
        }
        base
    }
}

/// Resolves slot ids in order.
///
/// Blank entries leave their slot empty. Unknown ids are logged at `warn` and
/// leave their slot empty. Entries past the last slot are dropped with a
/// warning.
pub fn parse_slots<T: FromStr>(kind: &str, names: &[String]) -> Slots<T> {
    if names.len() > ContestConfig::MAX_SLOTS {
        tracing::warn!(
            kind,
            given = names.len(),
            max = ContestConfig::MAX_SLOTS,
            "too many slots, ignoring the rest"
        );
    }
    contest_core::config::slots_from(names.iter().map(|name| {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        match name.parse::<T>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(kind, id = name, "unknown id, leaving slot empty");
                None
            }
        }
    }))
}

/// Loader for contest selections from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a selection from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ConfigOverrides> {
        let content = read_file(path)?;
        let overrides: ConfigOverrides = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use contest_core::{GambitId, JudgeId, StageId};
    use tempfile::TempDir;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn loads_partial_selection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            nature = "daring"
            gambits = ["cute_focus", "", "stage_finale"]
            appeal_uses = 2
            "#,
        )
        .unwrap();

        let overrides = ConfigLoader::load(&path).unwrap();
        let config = overrides.apply_to(ContestConfig::new("fenrir_adult"));

        assert_eq!(config.monster.as_str(), "fenrir_adult");
        assert_eq!(config.nature, NatureId::Daring);
        assert_eq!(config.mood, MoodId::Idol);
        assert_eq!(
            config.gambits,
            [Some(GambitId::CuteFocus), None, Some(GambitId::StageFinale)]
        );
        assert_eq!(config.stages[0], Some(StageId::Standard));
        assert_eq!(config.appeal_uses, 2);
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "monstr = \"fenrir_adult\"\n").unwrap();

        assert!(ConfigLoader::load(&path).is_err());
    }

    #[test]
    fn unknown_ids_leave_slots_empty() {
        let judges: Slots<JudgeId> =
            parse_slots("judge", &strings(&["wild_focus", "grumpy_critic"]));
        assert_eq!(judges, [Some(JudgeId::WildFocus), None, None]);

        let stages: Slots<StageId> = parse_slots(
            "stage",
            &strings(&["standard", "standard", "standard", "wild_show_stage"]),
        );
        assert_eq!(stages, [Some(StageId::Standard); 3]);
    }

    #[test]
    fn unknown_personality_is_neutral() {
        let overrides = ConfigOverrides {
            nature: Some("sleepy".into()),
            mood: Some("sleepy".into()),
            ..Default::default()
        };

        let base = ContestConfig::new("fenrir_adult")
            .with_nature(NatureId::Fierce)
            .with_mood(MoodId::Wild);
        let config = overrides.apply_to(base);

        assert_eq!(config.nature, NatureId::Natural);
        assert_eq!(config.mood, MoodId::Wild);
    }

    #[test]
    fn later_overrides_win() {
        let file = ConfigOverrides {
            monster: Some("jack_o_lantern".into()),
            appeal_uses: Some(1),
            ..Default::default()
        };
        let cli = ConfigOverrides {
            appeal_uses: Some(3),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.monster.as_deref(), Some("jack_o_lantern"));
        assert_eq!(merged.appeal_uses, Some(3));
    }
}
