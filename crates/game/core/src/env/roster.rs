//! Monster template definitions and oracle interface.
//!
//! Templates are read-only catalog rows: identity, archetype, unlock phase and
//! base stats. The `RosterOracle` trait lets runtime systems provide them by
//! monster ID (e.g., "fenrir_adult").

use core::fmt;

use crate::stats::StatVector;

/// Monster identifier from the roster catalog.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MonsterId(String);

impl MonsterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MonsterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MonsterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The role a monster plays in a troupe.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    /// Headliner
    Star,
    /// Sidekick and support
    Partner,
    /// Crowd warmer
    Moodmaker,
    /// Polished craftsman
    Specialist,
    /// Interpretive performer
    Artist,
}

impl Archetype {
    pub const fn label(self) -> &'static str {
        match self {
            Archetype::Star => "Star",
            Archetype::Partner => "Partner",
            Archetype::Moodmaker => "Mood Maker",
            Archetype::Specialist => "Specialist",
            Archetype::Artist => "Artist",
        }
    }
}

/// Campaign phase in which a monster becomes available.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterPhase {
    Early,
    Mid,
    Late,
}

impl MonsterPhase {
    pub const fn label(self) -> &'static str {
        match self {
            MonsterPhase::Early => "Early",
            MonsterPhase::Mid => "Mid",
            MonsterPhase::Late => "Late",
        }
    }
}

/// What unlocks a monster.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnlockCondition {
    Always,
    AfterLocalLeague,
    AfterNationalLeague,
    AfterWorldLeague,
    BondWithFenrirMax,
}

impl UnlockCondition {
    pub const fn label(self) -> &'static str {
        match self {
            UnlockCondition::Always => "Available from the start",
            UnlockCondition::AfterLocalLeague => "After clearing the local league",
            UnlockCondition::AfterNationalLeague => "After clearing the national league",
            UnlockCondition::AfterWorldLeague => "After clearing the world league",
            UnlockCondition::BondWithFenrirMax => "Max bond with Fenrir",
        }
    }
}

/// A roster entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    /// Position in the monster book (1-based)
    pub catalog_no: u16,
    pub id: MonsterId,
    pub name: String,
    pub archetype: Archetype,
    pub base_stats: StatVector,
    pub phase: MonsterPhase,
    pub unlock_condition: UnlockCondition,
    pub stamina_max: u8,
}

impl MonsterTemplate {
    /// Monster book number padded to three digits (`001`).
    pub fn catalog_label(&self) -> String {
        format!("{:03}", self.catalog_no)
    }
}

/// Read-only access to the monster roster.
pub trait RosterOracle: Send + Sync {
    fn template(&self, id: &MonsterId) -> Option<MonsterTemplate>;

    /// Returns all templates ordered by catalog number.
    fn templates(&self) -> Vec<MonsterTemplate>;

    /// Templates of one phase, ordered by catalog number.
    fn templates_in_phase(&self, phase: MonsterPhase) -> Vec<MonsterTemplate> {
        self.templates()
            .into_iter()
            .filter(|template| template.phase == phase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_label_is_zero_padded() {
        let template = MonsterTemplate {
            catalog_no: 7,
            id: MonsterId::from("plush_guard_beast"),
            name: "Guardy".into(),
            archetype: Archetype::Partner,
            base_stats: StatVector::new(48, 45, 53, 54),
            phase: MonsterPhase::Early,
            unlock_condition: UnlockCondition::Always,
            stamina_max: 3,
        };

        assert_eq!(template.catalog_label(), "007");
    }

    #[test]
    fn phases_order_early_to_late() {
        assert!(MonsterPhase::Early < MonsterPhase::Mid);
        assert!(MonsterPhase::Mid < MonsterPhase::Late);
    }
}
