//! Gambits - Layer 2 of the stat pipeline.
//!
//! Up to three gambit slots are applied in slot order. Each slot multiplies
//! the stats it lists and rounds immediately; the rounded vector feeds the
//! next slot. Because every slot rounds on its own, the result can depend on
//! slot order when a product lands near a rounding boundary.

use arrayvec::ArrayVec;

use super::layer::StatLayer;
use super::map::StatMap;
use super::vector::StatVector;
use crate::config::ContestConfig;

/// Gambit identifiers.
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
pub enum GambitId {
    /// Catalog entry with no multipliers.
    #[strum(serialize = "none")]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NoGambit,
    CuteFocus,
    WildShow,
    BalancedPose,
    EerieFocus,
    MajesticFocus,
    GlassCannon,
    SteadyPerformance,
    StageFinale,
}

/// A selectable per-stat multiplier profile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GambitProfile {
    pub id: GambitId,
    pub name: String,
    pub description: String,
    /// Multipliers for the stats this gambit touches (unlisted stay ×1.0)
    #[cfg_attr(feature = "serde", serde(default))]
    pub multipliers: StatMap,
}

impl GambitProfile {
    pub fn new(
        id: GambitId,
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

    /// Multiplies every listed stat and rounds it.
    pub fn apply(&self, stats: &StatVector) -> StatVector {
        self.multipliers
            .iter()
            .fold(*stats, |acc, (kind, factor)| acc.scaled(kind, factor))
    }
}

/// Applies gambits in order, rounding after each one.
///
/// `None` entries are empty slots and pass the vector through unchanged.
///
/// # Example
/// ```
/// # use contest_core::stats::*;
/// let cute = GambitProfile::new(
///     GambitId::CuteFocus,
///     "Cute",
///     "",
///     StatMap::empty().with(StatKind::Cute, 1.2),
/// );
/// let base = StatVector::new(48, 42, 56, 54);
///
/// let stats = apply_gambit_chain(&base, [Some(&cute), None, Some(&cute)]);
/// // 48 × 1.2 = 57.6 → 58, 58 × 1.2 = 69.6 → 70
/// assert_eq!(stats.cute, 70);
/// ```
pub fn apply_gambit_chain<'a, I>(stats: &StatVector, slots: I) -> StatVector
where
    I: IntoIterator<Item = Option<&'a GambitProfile>>,
{
    slots
        .into_iter()
        .flatten()
        .fold(*stats, |acc, gambit| gambit.apply(&acc))
}

/// The resolved gambit slots of one configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GambitChain {
    slots: ArrayVec<Option<GambitProfile>, { ContestConfig::MAX_SLOTS }>,
}

impl GambitChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chain from slot selections; slots past the third are ignored.
    pub fn from_slots(slots: impl IntoIterator<Item = Option<GambitProfile>>) -> Self {
        Self {
            slots: slots.into_iter().take(ContestConfig::MAX_SLOTS).collect(),
        }
    }

    /// Appends a slot. Returns `false` when all slots are taken.
    pub fn push(&mut self, slot: Option<GambitProfile>) -> bool {
        self.slots.try_push(slot).is_ok()
    }

    pub fn slots(&self) -> &[Option<GambitProfile>] {
        &self.slots
    }

    pub fn apply(&self, stats: &StatVector) -> StatVector {
        apply_gambit_chain(stats, self.slots.iter().map(Option::as_ref))
    }
}

/// Layer 2: Gambits
///
/// Base: effective stats (personality applied)
/// Input: GambitChain
/// Final: stats after every gambit slot
pub struct GambitLayer;

impl StatLayer for GambitLayer {
    type Input = GambitChain;

    fn compute(base: &StatVector, input: &Self::Input) -> StatVector {
        input.apply(base)
    }

    fn neutral() -> Self::Input {
        GambitChain::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    fn gambit(id: GambitId, multipliers: StatMap) -> GambitProfile {
        GambitProfile::new(id, id.to_string(), "", multipliers)
    }

    fn single(kind: StatKind, factor: f64) -> StatMap {
        StatMap::empty().with(kind, factor)
    }

    #[test]
    fn empty_chain_passes_through() {
        let base = StatVector::new(48, 42, 56, 54);

        assert_eq!(apply_gambit_chain(&base, []), base);
        assert_eq!(apply_gambit_chain(&base, [None, None, None]), base);
    }

    #[test]
    fn unlisted_stats_are_untouched() {
        let base = StatVector::new(48, 42, 56, 54);
        let cute = gambit(GambitId::CuteFocus, single(StatKind::Cute, 1.2));

        let stats = cute.apply(&base);

        assert_eq!(stats, StatVector::new(58, 42, 56, 54));
    }

    #[test]
    fn empty_profile_is_a_no_op() {
        let base = StatVector::new(48, 42, 56, 54);
        let none = gambit(GambitId::NoGambit, StatMap::empty());

        assert_eq!(apply_gambit_chain(&base, [Some(&none), Some(&none)]), base);
    }

    #[test]
    fn chain_rounds_after_every_slot() {
        // 5 × 1.1 = 5.5 → 6, then 6 × 0.9 = 5.4 → 5
        // 5 × 0.9 = 4.5 → 5, then 5 × 1.1 = 5.5 → 6
        let base = StatVector::new(5, 0, 0, 0);
        let up = gambit(GambitId::SteadyPerformance, single(StatKind::Cute, 1.1));
        let down = gambit(GambitId::EerieFocus, single(StatKind::Cute, 0.9));

        let up_then_down = apply_gambit_chain(&base, [Some(&up), Some(&down)]);
        let down_then_up = apply_gambit_chain(&base, [Some(&down), Some(&up)]);

        assert_eq!(up_then_down.cute, 5);
        assert_eq!(down_then_up.cute, 6);
        // A single combined multiplier (×0.99) would give 5 for both orders.
        assert_eq!(StatVector::new(5, 0, 0, 0).scaled(StatKind::Cute, 1.1 * 0.9).cute, 5);
    }

    #[test]
    fn same_profile_may_fill_several_slots() {
        let base = StatVector::new(48, 42, 56, 54);
        let wild = gambit(
            GambitId::WildShow,
            StatMap::empty()
                .with(StatKind::Impact, 1.2)
                .with(StatKind::Cute, 0.95)
                .with(StatKind::Majestic, 0.9),
        );

        let chain = GambitChain::from_slots([Some(wild.clone()), Some(wild.clone()), Some(wild)]);
        let stats = GambitLayer::compute(&base, &chain);

        // IP: 54 → 65 → 78 → 94, CT: 48 → 46 → 44 → 42, MJ: 56 → 50 → 45 → 41
        assert_eq!(stats, StatVector::new(42, 42, 41, 94));
    }

    #[test]
    fn chain_holds_at_most_three_slots() {
        let mut chain = GambitChain::from_slots([None, None, None, None]);
        assert_eq!(chain.slots().len(), 3);
        assert!(!chain.push(None));
    }
}
