//! Monster roster loader.

use std::collections::HashSet;
use std::path::Path;

use contest_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterCatalog {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for the monster roster.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    ///
    /// Returns the templates ordered by catalog number. Duplicate monster ids
    /// or catalog numbers are rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<MonsterTemplate>> {
        let catalog: RosterCatalog = read_ron(path, "monster roster")?;
        let mut monsters = catalog.monsters;

        let mut ids = HashSet::new();
        let mut numbers = HashSet::new();
        for monster in &monsters {
            if !ids.insert(monster.id.clone()) {
                anyhow::bail!("Duplicate monster id in roster: {}", monster.id);
            }
            if !numbers.insert(monster.catalog_no) {
                anyhow::bail!("Duplicate catalog number in roster: {}", monster.catalog_no);
            }
        }

        monsters.sort_by_key(|monster| monster.catalog_no);
        Ok(monsters)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use contest_core::{Archetype, MonsterPhase, StatVector};
    use tempfile::TempDir;

    use super::*;

    const TWO_MONSTERS: &str = r#"(
        monsters: [
            (
                catalog_no: 2,
                id: "jack_o_lantern",
                name: "Jack",
                archetype: moodmaker,
                base_stats: (cute: 57, eerie: 43, majestic: 45, impact: 55),
                phase: early,
                unlock_condition: always,
                stamina_max: 3,
            ),
            (
                catalog_no: 1,
                id: "fenrir_adult",
                name: "Fenrir",
                archetype: star,
                base_stats: (cute: 48, eerie: 42, majestic: 56, impact: 54),
                phase: early,
                unlock_condition: always,
                stamina_max: 3,
            ),
        ],
    )"#;

    #[test]
    fn loads_and_orders_by_catalog_number() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("monsters.ron");
        fs::write(&path, TWO_MONSTERS).unwrap();

        let monsters = RosterLoader::load(&path).unwrap();

        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].id.as_str(), "fenrir_adult");
        assert_eq!(monsters[0].archetype, Archetype::Star);
        assert_eq!(monsters[0].phase, MonsterPhase::Early);
        assert_eq!(monsters[0].base_stats, StatVector::new(48, 42, 56, 54));
        assert_eq!(monsters[1].catalog_no, 2);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("monsters.ron");
        fs::write(&path, TWO_MONSTERS.replace("jack_o_lantern", "fenrir_adult")).unwrap();

        let error = RosterLoader::load(&path).unwrap_err();
        assert!(error.to_string().contains("Duplicate monster id"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = RosterLoader::load(Path::new("/nonexistent/monsters.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/monsters.ron"));
    }
}
