//! Monster instances: a roster template plus personality and mood.

use crate::env::MonsterTemplate;
use crate::stats::{NatureId, StatVector};

/// Stage persona a monster performs in.
///
/// Moods are reported alongside an evaluation but do not modify stats.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum MoodId {
    #[default]
    Idol,
    Elegance,
    Mysterious,
    Wild,
    Trickster,
    Heartful,
}

impl MoodId {
    pub const fn label(self) -> &'static str {
        match self {
            MoodId::Idol => "Idol",
            MoodId::Elegance => "Elegance",
            MoodId::Mysterious => "Mysterious",
            MoodId::Wild => "Wild",
            MoodId::Trickster => "Trickster",
            MoodId::Heartful => "Heartful",
        }
    }

    /// Character flavors a mood can be played as.
    pub const fn flavors(self) -> &'static [&'static str] {
        match self {
            MoodId::Idol => &["Classic Idol", "Second Lead", "Lovable Runner-up"],
            MoodId::Elegance => &[
                "Heartthrob",
                "Cool Beauty",
                "Mode",
                "Stylish",
                "High Fashion",
            ],
            MoodId::Mysterious => &["Bewitching", "Artisan Soul", "Obsessive"],
            MoodId::Wild => &["Full of Pep", "Child of Nature", "Rowdy"],
            MoodId::Trickster => &["Little Devil", "Prankster"],
            MoodId::Heartful => &["Easygoing", "Gentle", "Sentimental"],
        }
    }
}

/// A concrete monster: template, personality and the mood it performs in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterInstance {
    pub template: MonsterTemplate,
    pub nature: NatureId,
    pub active_mood: MoodId,
}

impl MonsterInstance {
    pub fn new(template: MonsterTemplate, nature: NatureId, active_mood: MoodId) -> Self {
        Self {
            template,
            nature,
            active_mood,
        }
    }

    /// Base stats with the personality applied.
    pub fn effective_stats(&self) -> StatVector {
        self.nature.apply(&self.template.base_stats)
    }
}
