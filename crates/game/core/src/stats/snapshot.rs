//! StatsSnapshot - every intermediate vector of one pipeline run.
//!
//! The snapshot records the output of each layer so a report can show how the
//! final stats were reached. It is immutable; re-run the pipeline when the
//! configuration changes.

use super::appeal::{AppealLayer, AppealUse};
use super::gambit::{GambitChain, GambitLayer};
use super::layer::StatLayer;
use super::nature::{NatureId, NatureLayer};
use super::vector::StatVector;

/// Stats captured after every layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    /// Template base stats
    pub base: StatVector,

    /// After personality (Layer 1)
    pub effective: StatVector,

    /// After the gambit chain (Layer 2)
    pub after_gambits: StatVector,

    /// After the appeal (Layer 3); the vector the judges score
    pub final_stats: StatVector,
}

impl StatsSnapshot {
    /// Runs every layer in order.
    ///
    /// # Arguments
    /// * `base` - Template base stats
    /// * `nature` - Personality
    /// * `gambits` - Resolved gambit slots
    /// * `appeal` - Appeal and use count
    pub fn create(
        base: &StatVector,
        nature: NatureId,
        gambits: &GambitChain,
        appeal: &AppealUse,
    ) -> Self {
        // Layer 1: Personality
        let effective = NatureLayer::compute(base, &nature);

        // Layer 2: Gambit chain
        let after_gambits = GambitLayer::compute(&effective, gambits);

        // Layer 3: Appeal
        let final_stats = AppealLayer::compute(&after_gambits, appeal);

        Self {
            base: *base,
            effective,
            after_gambits,
            final_stats,
        }
    }

    /// Snapshot with every layer neutral.
    pub fn from_base(base: &StatVector) -> Self {
        Self::create(
            base,
            NatureLayer::neutral(),
            &GambitLayer::neutral(),
            &AppealLayer::neutral(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{AppealId, AppealProfile, GambitId, GambitProfile, StatKind, StatMap};

    const FENRIR: StatVector = StatVector::new(48, 42, 56, 54);

    #[test]
    fn neutral_layers_keep_base() {
        let snapshot = StatsSnapshot::from_base(&FENRIR);

        assert_eq!(snapshot.effective, FENRIR);
        assert_eq!(snapshot.after_gambits, FENRIR);
        assert_eq!(snapshot.final_stats, FENRIR);
    }

    #[test]
    fn layers_run_in_order() {
        let cute = GambitProfile::new(
            GambitId::CuteFocus,
            "Cute",
            "",
            StatMap::empty().with(StatKind::Cute, 1.2),
        );
        let kiss = AppealProfile::new(
            AppealId::ThrowKiss,
            "Kiss",
            "",
            StatMap::empty().with(StatKind::Cute, 1.3),
        );

        let snapshot = StatsSnapshot::create(
            &FENRIR,
            NatureId::Cheerful,
            &GambitChain::from_slots([Some(cute), None, None]),
            &AppealUse::new(Some(kiss), 1),
        );

        // Cheerful: CT 48 × 1.1 = 52.8 → 53, ER 42 × 0.9 = 37.8 → 38
        assert_eq!(snapshot.effective, StatVector::new(53, 38, 56, 54));
        // Cute focus: CT 53 × 1.2 = 63.6 → 64
        assert_eq!(snapshot.after_gambits, StatVector::new(64, 38, 56, 54));
        // Throw kiss once: CT 64 × 1.3 = 83.2 → 83
        assert_eq!(snapshot.final_stats, StatVector::new(83, 38, 56, 54));
        assert_eq!(snapshot.base, FENRIR);
    }
}
