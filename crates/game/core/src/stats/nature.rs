//! Personality - Layer 1 of the stat pipeline.
//!
//! A personality raises at most one stat by 10% and lowers at most one other
//! stat by 10%, each rounded on its own.

use super::layer::StatLayer;
use super::vector::{StatKind, StatVector};

/// Personality identifiers.
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
pub enum NatureId {
    /// No adjustment
    #[default]
    Natural,
    /// IMPACT↑ CUTE↓
    Daring,
    /// EERIE↑ IMPACT↓
    Shy,
    /// MAJESTIC↑ IMPACT↓
    Noble,
    /// MAJESTIC↑ EERIE↓
    Radiant,
    /// CUTE↑ EERIE↓
    Cheerful,
    /// EERIE↑ CUTE↓
    Gloomy,
    /// IMPACT↑ MAJESTIC↓
    Fierce,
    /// CUTE↑ IMPACT↓
    Fluffy,
}

impl NatureId {
    /// The up/down pair for this personality.
    pub const fn modifier(self) -> NatureModifier {
        use StatKind::*;
        match self {
            NatureId::Natural => NatureModifier::NEUTRAL,
            NatureId::Daring => NatureModifier::new(Impact, Cute),
            NatureId::Shy => NatureModifier::new(Eerie, Impact),
            NatureId::Noble => NatureModifier::new(Majestic, Impact),
            NatureId::Radiant => NatureModifier::new(Majestic, Eerie),
            NatureId::Cheerful => NatureModifier::new(Cute, Eerie),
            NatureId::Gloomy => NatureModifier::new(Eerie, Cute),
            NatureId::Fierce => NatureModifier::new(Impact, Majestic),
            NatureId::Fluffy => NatureModifier::new(Cute, Impact),
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            NatureId::Natural => "Natural",
            NatureId::Daring => "Reckless",
            NatureId::Shy => "Reserved",
            NatureId::Noble => "Noble",
            NatureId::Radiant => "Divine",
            NatureId::Cheerful => "Cheerful",
            NatureId::Gloomy => "Gloomy",
            NatureId::Fierce => "Bold",
            NatureId::Fluffy => "Fluffy",
        }
    }

    /// Applies this personality to `base`.
    pub fn apply(self, base: &StatVector) -> StatVector {
        self.modifier().apply(base)
    }
}

/// Which stat a personality raises and which it lowers.
///
/// `up` and `down` are never the same stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NatureModifier {
    pub up: Option<StatKind>,
    pub down: Option<StatKind>,
}

impl NatureModifier {
    pub const UP_FACTOR: f64 = 1.1;
    pub const DOWN_FACTOR: f64 = 0.9;

    pub const NEUTRAL: Self = Self {
        up: None,
        down: None,
    };

    const fn new(up: StatKind, down: StatKind) -> Self {
        Self {
            up: Some(up),
            down: Some(down),
        }
    }

    pub fn apply(&self, base: &StatVector) -> StatVector {
        let mut result = *base;
        if let Some(kind) = self.up {
            result = result.scaled(kind, Self::UP_FACTOR);
        }
        if let Some(kind) = self.down {
            result = result.scaled(kind, Self::DOWN_FACTOR);
        }
        result
    }
}

/// Layer 1: Personality
///
/// Base: template base stats
/// Input: NatureId
/// Final: effective stats
pub struct NatureLayer;

impl StatLayer for NatureLayer {
    type Input = NatureId;

    fn compute(base: &StatVector, input: &Self::Input) -> StatVector {
        input.apply(base)
    }

    fn neutral() -> Self::Input {
        NatureId::Natural
    }
}
