//! Stage/judge aggregation.

use arrayvec::ArrayVec;

use super::judge::{JudgeId, JudgeProfile};
use super::stage::{StageId, StageProfile};
use crate::config::ContestConfig;
use crate::stats::StatVector;

/// One judge's score on one stage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgeScore {
    /// Judge slot index (0-based)
    pub slot: usize,
    pub judge: JudgeId,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageResult {
    /// Stage slot index (0-based)
    pub slot: usize,
    pub stage: StageId,
    pub judges: ArrayVec<JudgeScore, { ContestConfig::MAX_SLOTS }>,
    /// Sum of the judge scores
    pub total: f64,
}

/// Scores for every valid stage plus the totals across them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSheet {
    pub stages: ArrayVec<StageResult, { ContestConfig::MAX_SLOTS }>,
    pub grand_total: f64,
    /// `grand_total / stages.len()`, or 0 with no valid stage
    pub average: f64,
}

impl ScoreSheet {
    /// Number of stages that resolved to a profile.
    pub fn valid_stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Scores `stats` on every resolved stage with every resolved judge.
///
/// Iteration is stage-major, judge-minor. Empty slots are skipped and slots
/// past [`ContestConfig::MAX_SLOTS`] are ignored. A stage without any judge
/// still counts as valid, with a total of 0.
pub fn aggregate(
    stats: &StatVector,
    stages: &[Option<StageProfile>],
    judges: &[Option<JudgeProfile>],
) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();

    let stage_slots = stages.iter().enumerate().take(ContestConfig::MAX_SLOTS);
    for (slot, stage) in stage_slots {
        let Some(stage) = stage else { continue };

        let scores: ArrayVec<JudgeScore, { ContestConfig::MAX_SLOTS }> = judges
            .iter()
            .enumerate()
            .take(ContestConfig::MAX_SLOTS)
            .filter_map(|(judge_slot, judge)| {
                judge.as_ref().map(|judge| JudgeScore {
                    slot: judge_slot,
                    judge: judge.id,
                    score: judge.score(stats, Some(stage)),
                })
            })
            .collect();

        let total = scores.iter().fold(0.0, |sum, entry| sum + entry.score);
        sheet.grand_total += total;
        sheet.stages.push(StageResult {
            slot,
            stage: stage.id,
            judges: scores,
            total,
        });
    }

    if !sheet.stages.is_empty() {
        sheet.average = sheet.grand_total / sheet.stages.len() as f64;
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StatKind, StatMap};

    fn cute_judge() -> JudgeProfile {
        JudgeProfile::new(
            JudgeId::CuteFocus,
            "Cute",
            "",
            StatMap::empty().with(StatKind::Cute, 1.0),
        )
    }

    #[test]
    fn averages_over_valid_stages() {
        let stats = StatVector::new(100, 0, 0, 0);
        let stages = [
            Some(StageProfile::new(StageId::Standard, "Standard", "", StatMap::empty())),
            None,
            Some(StageProfile::new(
                StageId::WildShowStage,
                "Wild",
                "",
                StatMap::empty().with(StatKind::Cute, 0.8),
            )),
        ];

        let sheet = aggregate(&stats, &stages, &[Some(cute_judge())]);

        // 100 + 80 = 180 over two valid stages
        assert_eq!(sheet.valid_stage_count(), 2);
        assert_eq!(sheet.stages[0].total, 100.0);
        assert_eq!(sheet.stages[1].total, 80.0);
        assert_eq!(sheet.stages[1].slot, 2);
        assert_eq!(sheet.grand_total, 180.0);
        assert_eq!(sheet.average, 90.0);
    }

    #[test]
    fn no_valid_stage_averages_zero() {
        let stats = StatVector::new(60, 45, 50, 45);
        let sheet = aggregate(&stats, &[None, None, None], &[Some(cute_judge())]);

        assert!(sheet.stages.is_empty());
        assert_eq!(sheet.grand_total, 0.0);
        assert_eq!(sheet.average, 0.0);
    }

    #[test]
    fn stage_without_judges_counts_with_zero_total() {
        let stats = StatVector::new(60, 45, 50, 45);
        let stages = [Some(StageProfile::new(
            StageId::Standard,
            "Standard",
            "",
            StatMap::empty(),
        ))];

        let sheet = aggregate(&stats, &stages, &[None, None, None]);

        assert_eq!(sheet.valid_stage_count(), 1);
        assert!(sheet.stages[0].judges.is_empty());
        assert_eq!(sheet.average, 0.0);
    }

    #[test]
    fn judge_slots_keep_their_index() {
        let stats = StatVector::new(10, 0, 0, 0);
        let stages = [Some(StageProfile::new(
            StageId::Standard,
            "Standard",
            "",
            StatMap::empty(),
        ))];

        let sheet = aggregate(&stats, &stages, &[None, Some(cute_judge()), Some(cute_judge())]);

        let slots: Vec<_> = sheet.stages[0].judges.iter().map(|s| s.slot).collect();
        assert_eq!(slots, vec![1, 2]);
        assert_eq!(sheet.stages[0].total, 20.0);
    }
}
