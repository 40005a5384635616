//! Partial per-stat tables.
//!
//! Gambit and appeal multipliers, judge weights and stage biases all name a
//! subset of the four stats. `StatMap` keeps one optional entry per stat so an
//! unlisted stat is distinguishable from an explicit 1.0 or 0.0.

use core::fmt;

use super::vector::StatKind;

/// One optional value per stat.
///
/// RON catalogs write these as `(cute: 1.2, impact: 0.95)` with
/// `implicit_some` enabled; unlisted stats stay `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMap<T = f64> {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub cute: Option<T>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub eerie: Option<T>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub majestic: Option<T>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub impact: Option<T>,
}

impl<T: Copy> StatMap<T> {
    /// A map with no entries.
    pub const fn empty() -> Self {
        Self {
            cute: None,
            eerie: None,
            majestic: None,
            impact: None,
        }
    }

    #[inline]
    pub const fn get(&self, kind: StatKind) -> Option<T> {
        match kind {
            StatKind::Cute => self.cute,
            StatKind::Eerie => self.eerie,
            StatKind::Majestic => self.majestic,
            StatKind::Impact => self.impact,
        }
    }

    /// Sets an entry (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: StatKind, value: T) -> Self {
        let slot = match kind {
            StatKind::Cute => &mut self.cute,
            StatKind::Eerie => &mut self.eerie,
            StatKind::Majestic => &mut self.majestic,
            StatKind::Impact => &mut self.impact,
        };
        *slot = Some(value);
        self
    }

    /// Iterates listed entries in canonical CT/ER/MJ/IP order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, T)> + '_ {
        StatKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|value| (kind, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<T: Copy> FromIterator<(StatKind, T)> for StatMap<T> {
    fn from_iter<I: IntoIterator<Item = (StatKind, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |map, (kind, value)| map.with(kind, value))
    }
}

impl StatMap<f64> {
    /// Entry for `kind`, or 1.0 when unlisted.
    #[inline]
    pub fn factor(&self, kind: StatKind) -> f64 {
        self.get(kind).unwrap_or(1.0)
    }

    /// Lists entries as `CT×1.2 / IP×0.95`.
    ///
    /// Returns a value implementing `Display`; an empty selection renders as
    /// `no modifier`.
    pub fn summary(&self) -> MultiplierSummary<'_> {
        MultiplierSummary {
            map: self,
            skip_neutral: false,
        }
    }

    /// Like [`summary`](Self::summary) but omits entries equal to 1.0.
    pub fn summary_without_neutral(&self) -> MultiplierSummary<'_> {
        MultiplierSummary {
            map: self,
            skip_neutral: true,
        }
    }
}

/// Display adapter returned by [`StatMap::summary`].
pub struct MultiplierSummary<'a> {
    map: &'a StatMap<f64>,
    skip_neutral: bool,
}

impl fmt::Display for MultiplierSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        for (kind, value) in self.map.iter() {
            if self.skip_neutral && value == 1.0 {
                continue;
            }
            if written > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{}×{}", kind.label(), value)?;
            written += 1;
        }
        if written == 0 {
            f.write_str("no modifier")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_entries_default_to_one() {
        let map: StatMap = StatMap::empty().with(StatKind::Cute, 1.2);

        assert_eq!(map.factor(StatKind::Cute), 1.2);
        assert_eq!(map.factor(StatKind::Impact), 1.0);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn summary_lists_entries_in_canonical_order() {
        let map: StatMap = [(StatKind::Impact, 1.2), (StatKind::Cute, 0.95)]
            .into_iter()
            .collect();

        assert_eq!(map.summary().to_string(), "CT×0.95 / IP×1.2");
    }

    #[test]
    fn summary_of_empty_map() {
        assert_eq!(StatMap::<f64>::empty().summary().to_string(), "no modifier");
    }

    #[test]
    fn neutral_entries_can_be_hidden() {
        let map: StatMap = StatMap::empty()
            .with(StatKind::Eerie, 1.0)
            .with(StatKind::Majestic, 1.15);

        assert_eq!(map.summary().to_string(), "ER×1 / MJ×1.15");
        assert_eq!(map.summary_without_neutral().to_string(), "MJ×1.15");
    }
}
