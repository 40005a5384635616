//! Appeals - Layer 3 of the stat pipeline.
//!
//! An appeal is a monster's signature move. Its multipliers are per use and
//! accumulate linearly: `uses` applications of a ×`m` boost give
//! `1 + (m - 1) × uses`, applied once and rounded once.

use super::layer::StatLayer;
use super::map::StatMap;
use super::vector::StatVector;

/// Appeal identifiers.
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
pub enum AppealId {
    CoolHowl,
    ThrowKiss,
    SpinTurn,
    GlanceShot,
    BashfulSmile,
    WeirdDance,
}

/// A signature move and its single-use multipliers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppealProfile {
    pub id: AppealId,
    pub name: String,
    pub description: String,
    /// Multiplier for one use (e.g. `impact: 1.25`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub multipliers: StatMap,
}

impl AppealProfile {
    pub fn new(
        id: AppealId,
        name: impl Into<String>,
        description: impl Into<String>,
        multipliers: StatMap,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            multipliers,
        }
    }

    /// Applies this appeal `uses` times in a row.
    pub fn apply(&self, stats: &StatVector, uses: i32) -> StatVector {
        if uses <= 0 {
            return *stats;
        }
        self.multipliers
            .iter()
            .fold(*stats, |acc, (kind, per_use)| {
                acc.scaled(kind, total_multiplier(per_use, uses))
            })
    }
}

/// Accumulated multiplier after `uses` applications of a ×`per_use` boost.
///
/// Linear, not compounding: `1 + (per_use - 1) × uses`.
///
/// ```
/// # use contest_core::stats::total_multiplier;
/// assert_eq!(total_multiplier(1.3, 2), 1.6);
/// assert_eq!(total_multiplier(1.3, 0), 1.0);
/// ```
#[inline]
pub fn total_multiplier(per_use: f64, uses: i32) -> f64 {
    1.0 + (per_use - 1.0) * f64::from(uses)
}

/// Applies an optional appeal; absent appeals and `uses <= 0` are no-ops.
pub fn apply_appeal(stats: &StatVector, appeal: Option<&AppealProfile>, uses: i32) -> StatVector {
    match appeal {
        Some(appeal) => appeal.apply(stats, uses),
        None => *stats,
    }
}

/// An appeal selection: the monster's appeal (if any) and how often it is used.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppealUse {
    pub appeal: Option<AppealProfile>,
    pub uses: i32,
}

impl AppealUse {
    pub fn new(appeal: Option<AppealProfile>, uses: i32) -> Self {
        Self { appeal, uses }
    }
}

/// Layer 3: Appeal
///
/// Base: stats after the gambit chain
/// Input: AppealUse
/// Final: final stats used for judging
pub struct AppealLayer;

impl StatLayer for AppealLayer {
    type Input = AppealUse;

    fn compute(base: &StatVector, input: &Self::Input) -> StatVector {
        apply_appeal(base, input.appeal.as_ref(), input.uses)
    }

    fn neutral() -> Self::Input {
        AppealUse::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    fn cool_howl() -> AppealProfile {
        AppealProfile::new(
            AppealId::CoolHowl,
            "Cool Howl",
            "",
            StatMap::empty()
                .with(StatKind::Impact, 1.25)
                .with(StatKind::Majestic, 1.15),
        )
    }

    #[test]
    fn zero_or_negative_uses_change_nothing() {
        let base = StatVector::new(48, 42, 56, 54);
        let appeal = cool_howl();

        assert_eq!(appeal.apply(&base, 0), base);
        assert_eq!(appeal.apply(&base, -3), base);
    }

    #[test]
    fn missing_appeal_changes_nothing() {
        let base = StatVector::new(48, 42, 56, 54);
        assert_eq!(apply_appeal(&base, None, 5), base);
    }

    #[test]
    fn multiplier_accumulates_linearly() {
        assert_eq!(total_multiplier(1.3, 2), 1.6);
        assert_eq!(total_multiplier(1.25, 4), 2.0);
        // Compounding would give 1.3² = 1.69
        assert_ne!(total_multiplier(1.3, 2), 1.3 * 1.3);
    }

    #[test]
    fn applies_once_with_accumulated_multiplier() {
        let base = StatVector::new(48, 42, 56, 54);

        let stats = cool_howl().apply(&base, 2);

        // IP: 54 × 1.5 = 81, MJ: 56 × 1.3 = 72.8 → 73
        assert_eq!(stats, StatVector::new(48, 42, 73, 81));
    }

    #[test]
    fn single_use_matches_plain_multiplier() {
        let base = StatVector::new(60, 45, 50, 45);
        let kiss = AppealProfile::new(
            AppealId::ThrowKiss,
            "Throw Kiss",
            "",
            StatMap::empty().with(StatKind::Cute, 1.3),
        );

        assert_eq!(kiss.apply(&base, 1).cute, 78);
    }
}
