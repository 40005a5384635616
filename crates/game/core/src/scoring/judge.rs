//! Judge profiles and the scoring function.

use core::fmt;

use super::stage::StageProfile;
use crate::stats::{StatMap, StatVector};

/// Judge identifiers.
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
pub enum JudgeId {
    CuteFocus,
    WildFocus,
    BalanceFocus,
    DarkMystic,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgeProfile {
    pub id: JudgeId,
    pub name: String,
    pub description: String,
    /// Non-negative weight per stat; unlisted stats are ignored
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: StatMap,
}

impl JudgeProfile {
    pub fn new(
        id: JudgeId,
        name: impl Into<String>,
        description: impl Into<String>,
        weights: StatMap,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            weights,
        }
    }

    /// Weighted sum of `stats`, each weight scaled by the stage bias.
    ///
    /// Only stats listed in the judge's weights contribute. The result is not
    /// rounded; an empty weight map scores 0.
    pub fn score(&self, stats: &StatVector, stage: Option<&StageProfile>) -> f64 {
        self.weights.iter().fold(0.0, |total, (kind, weight)| {
            let bias = stage.map_or(1.0, |stage| stage.bias_for(kind));
            total + f64::from(stats.get(kind)) * weight * bias
        })
    }

    /// Renders the weights as `CT×1 + MJ×0.4`.
    pub fn formula(&self) -> JudgeFormula<'_> {
        JudgeFormula {
            weights: &self.weights,
        }
    }
}

/// Display adapter returned by [`JudgeProfile::formula`].
pub struct JudgeFormula<'a> {
    weights: &'a StatMap,
}

impl fmt::Display for JudgeFormula<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weights.is_empty() {
            return f.write_str("0");
        }
        for (index, (kind, weight)) in self.weights.iter().enumerate() {
            if index > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{}×{}", kind.label(), weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::StageId;
    use crate::stats::StatKind;

    const FENRIR: StatVector = StatVector::new(48, 42, 56, 54);

    fn wild_focus() -> JudgeProfile {
        JudgeProfile::new(
            JudgeId::WildFocus,
            "Impact Judge",
            "",
            StatMap::empty()
                .with(StatKind::Impact, 1.0)
                .with(StatKind::Cute, 0.3),
        )
    }

    #[test]
    fn scores_weighted_sum_without_stage() {
        // 54 × 1.0 + 48 × 0.3 = 68.4
        let score = wild_focus().score(&FENRIR, None);
        assert!((score - 68.4).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn stage_bias_scales_listed_weights() {
        let stage = StageProfile::new(
            StageId::WildShowStage,
            "Wild Showtime",
            "",
            StatMap::empty()
                .with(StatKind::Impact, 1.2)
                .with(StatKind::Cute, 0.9)
                .with(StatKind::Eerie, 5.0),
        );

        // 54 × 1.0 × 1.2 + 48 × 0.3 × 0.9 = 64.8 + 12.96 = 77.76; eerie is not weighted
        let score = wild_focus().score(&FENRIR, Some(&stage));
        assert!((score - 77.76).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn empty_weights_score_zero() {
        let judge = JudgeProfile::new(JudgeId::DarkMystic, "Nobody", "", StatMap::empty());
        assert_eq!(judge.score(&FENRIR, None), 0.0);
        assert_eq!(judge.formula().to_string(), "0");
    }

    #[test]
    fn formula_lists_weights() {
        let judge = JudgeProfile::new(
            JudgeId::CuteFocus,
            "Cuteness Purist",
            "",
            StatMap::empty()
                .with(StatKind::Cute, 1.0)
                .with(StatKind::Majestic, 0.4),
        );
        assert_eq!(judge.formula().to_string(), "CT×1 + MJ×0.4");
    }
}
