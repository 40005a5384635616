//! The layer abstraction shared by every stat transformation.

use super::vector::StatVector;

/// Trait for pipeline layers that follow the Base -> Input -> Final pattern.
///
/// Every layer takes the previous layer's vector plus its own input and
/// returns a new vector:
///
/// ```text
/// Layer 1: base     + NatureId        -> effective
/// Layer 2: effective + GambitChain    -> after_gambits
/// Layer 3: after_gambits + AppealUse  -> final
/// ```
///
/// Layers never reorder or merge their rounding steps; chaining two layers is
/// always `Second::compute(&First::compute(base, a), b)`.
///
/// # Examples
///
/// ```
/// # use contest_core::stats::*;
/// fn through_neutral<L: StatLayer>(base: &StatVector) -> StatVector {
///     L::passthrough(base)
/// }
///
/// let base = StatVector::new(48, 42, 56, 54);
/// assert_eq!(through_neutral::<NatureLayer>(&base), base);
/// assert_eq!(through_neutral::<GambitLayer>(&base), base);
/// assert_eq!(through_neutral::<AppealLayer>(&base), base);
/// ```
pub trait StatLayer {
    /// Per-layer selection (personality, gambit slots, appeal use).
    type Input;

    /// Applies this layer to `base`.
    fn compute(base: &StatVector, input: &Self::Input) -> StatVector;

    /// The input that leaves every vector unchanged.
    fn neutral() -> Self::Input;

    /// Compute with the neutral input (convenience method)
    fn passthrough(base: &StatVector) -> StatVector {
        Self::compute(base, &Self::neutral())
    }
}
