//! Stage profiles.

use crate::stats::{MultiplierSummary, StatKind, StatMap};

/// Stage identifiers.
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
pub enum StageId {
    Standard,
    CuteFocusStage,
    WildShowStage,
    SpookyCuteStage,
}

/// A venue. Its bias scales judge weights; it never touches the stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageProfile {
    pub id: StageId,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bias: StatMap,
}

impl StageProfile {
    pub fn new(
        id: StageId,
        name: impl Into<String>,
        description: impl Into<String>,
        bias: StatMap,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            bias,
        }
    }

    /// Bias for `kind`; 1.0 when the stage does not list it.
    #[inline]
    pub fn bias_for(&self, kind: StatKind) -> f64 {
        self.bias.factor(kind)
    }

    pub fn bias_summary(&self) -> MultiplierSummary<'_> {
        self.bias.summary()
    }
}
