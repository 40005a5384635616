//! [`contest_core::RosterOracle`] backed by an in-memory map.
use contest_core::{MonsterId, MonsterTemplate, RosterOracle};
use std::collections::HashMap;

/// RosterOracle implementation with static monster templates
pub struct RosterOracleImpl {
    templates: HashMap<MonsterId, MonsterTemplate>,
}

impl RosterOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn from_templates(templates: impl IntoIterator<Item = MonsterTemplate>) -> Self {
        let mut oracle = Self::new();
        for template in templates {
            oracle.add_template(template);
        }
        oracle
    }

    /// Add a template, replacing any template with the same id
    pub fn add_template(&mut self, template: MonsterTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    /// The template with the lowest catalog number.
    pub fn first(&self) -> Option<&MonsterTemplate> {
        self.templates.values().min_by_key(|template| template.catalog_no)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for RosterOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterOracle for RosterOracleImpl {
    fn template(&self, id: &MonsterId) -> Option<MonsterTemplate> {
        self.templates.get(id).cloned()
    }

    fn templates(&self) -> Vec<MonsterTemplate> {
        let mut templates: Vec<_> = self.templates.values().cloned().collect();
        templates.sort_by_key(|template| template.catalog_no);
        templates
    }
}
