//! Stat vector - the four-field record threaded through every layer.
//!
//! Every layer takes a `StatVector` by reference and returns a new one. Values
//! are non-negative integers; multiplicative steps round to the nearest
//! integer immediately via [`scale`].

use core::fmt;

/// The four contest attributes.
///
/// - **Cute** (CT): charm and approachability
/// - **Eerie** (ER): mystery and unsettling presence
/// - **Majestic** (MJ): grandeur and poise
/// - **Impact** (IP): raw stage power
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
pub enum StatKind {
    Cute,
    Eerie,
    Majestic,
    Impact,
}

impl StatKind {
    pub const COUNT: usize = 4;

    /// All kinds in canonical CT/ER/MJ/IP order.
    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Cute,
        StatKind::Eerie,
        StatKind::Majestic,
        StatKind::Impact,
    ];

    /// Two-letter label used in logs and reports.
    pub const fn label(self) -> &'static str {
        match self {
            StatKind::Cute => "CT",
            StatKind::Eerie => "ER",
            StatKind::Majestic => "MJ",
            StatKind::Impact => "IP",
        }
    }
}

/// A monster's stats at one point of the pipeline.
///
/// `StatVector` is `Copy`; transformations return a fresh value and never
/// mutate their input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatVector {
    pub cute: u32,
    pub eerie: u32,
    pub majestic: u32,
    pub impact: u32,
}

impl StatVector {
    pub const fn new(cute: u32, eerie: u32, majestic: u32, impact: u32) -> Self {
        Self {
            cute,
            eerie,
            majestic,
            impact,
        }
    }

    #[inline]
    pub const fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Cute => self.cute,
            StatKind::Eerie => self.eerie,
            StatKind::Majestic => self.majestic,
            StatKind::Impact => self.impact,
        }
    }

    /// Returns a copy with `kind` replaced by `value`.
    #[must_use]
    pub const fn with(mut self, kind: StatKind, value: u32) -> Self {
        match kind {
            StatKind::Cute => self.cute = value,
            StatKind::Eerie => self.eerie = value,
            StatKind::Majestic => self.majestic = value,
            StatKind::Impact => self.impact = value,
        }
        self
    }

    /// Returns a copy with `kind` multiplied by `factor` and rounded.
    #[must_use]
    pub fn scaled(self, kind: StatKind, factor: f64) -> Self {
        self.with(kind, scale(self.get(kind), factor))
    }

    /// Iterates `(kind, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> u32 {
        self.cute + self.eerie + self.majestic + self.impact
    }
}

impl fmt::Display for StatVector {
    /// `CT48 / ER42 / MJ56 / IP54`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CT{} / ER{} / MJ{} / IP{}",
            self.cute, self.eerie, self.majestic, self.impact
        )
    }
}

/// Multiplies a stat by `factor` and rounds to the nearest integer.
///
/// Halves round up (values are never negative). A negative or NaN product
/// saturates to 0, so the non-negative invariant holds for any catalog data.
#[inline]
pub fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_rounds_to_nearest() {
        // 48 × 1.2 = 57.599999999999994
        assert_eq!(scale(48, 1.2), 58);
        // 5 × 0.9 = 4.5 rounds up
        assert_eq!(scale(5, 0.9), 5);
        assert_eq!(scale(45, 0.9), 41);
    }

    #[test]
    fn scale_saturates_negative_products() {
        assert_eq!(scale(40, -1.5), 0);
        assert_eq!(scale(40, f64::NAN), 0);
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base = StatVector::new(48, 42, 56, 54);
        let changed = base.with(StatKind::Eerie, 1);

        assert_eq!(base.eerie, 42);
        assert_eq!(changed, StatVector::new(48, 1, 56, 54));
    }

    #[test]
    fn display_uses_two_letter_labels() {
        let stats = StatVector::new(48, 42, 56, 54);
        assert_eq!(stats.to_string(), "CT48 / ER42 / MJ56 / IP54");
    }

    #[test]
    fn kinds_parse_case_insensitively() {
        assert_eq!("IMPACT".parse::<StatKind>().unwrap(), StatKind::Impact);
        assert_eq!(StatKind::Majestic.as_ref(), "majestic");
    }
}
