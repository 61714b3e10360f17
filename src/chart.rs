//! Typed natal chart input records.
//!
//! The chart arrives fully computed from an external provider (sidereal
//! longitudes, signs, retrograde flags, ascendant); this layer trusts the
//! supplied sign and never recomputes it except where a rule needs
//! nakshatra-level resolution from the raw longitude.
//!
//! Positions are stored in a fixed 9-slot array indexed by
//! `Graha::index()`. A slot may be empty (e.g. a provider that omits the
//! nodes); rule engines that need the missing graha degrade instead of
//! failing.

use serde::{Deserialize, Serialize};

use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::rashi::Rashi;

/// Position of a single graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaPosition {
    /// Occupied rashi, as supplied by the chart provider.
    pub rashi: Rashi,
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Whether the graha is in retrograde motion.
    pub retrograde: bool,
}

/// A computed natal chart: ascendant sign plus per-graha positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chart {
    /// Ascendant (lagna) sign, if the provider supplied one.
    pub lagna: Option<Rashi>,
    /// Per-graha positions, indexed by `Graha::index()`.
    positions: [Option<GrahaPosition>; 9],
}

impl Chart {
    /// Empty chart with the given ascendant.
    pub fn new(lagna: Option<Rashi>) -> Self {
        Self {
            lagna,
            positions: [None; 9],
        }
    }

    /// Set a graha's position. Replaces any existing entry.
    pub fn set(&mut self, graha: Graha, position: GrahaPosition) {
        self.positions[graha.index() as usize] = Some(position);
    }

    /// Builder-style position insert.
    pub fn with(mut self, graha: Graha, position: GrahaPosition) -> Self {
        self.set(graha, position);
        self
    }

    /// Position of a graha, if present.
    pub fn position(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.positions[graha.index() as usize].as_ref()
    }

    /// Occupied rashi of a graha, if present.
    pub fn rashi_of(&self, graha: Graha) -> Option<Rashi> {
        self.position(graha).map(|p| p.rashi)
    }

    /// Iterate over all present graha positions.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, &GrahaPosition)> {
        ALL_GRAHAS
            .iter()
            .filter_map(|g| self.position(*g).map(|p| (*g, p)))
    }

    /// Rashi of each sapta graha, if all seven are present.
    ///
    /// Temporal friendship and full dignity need the complete classical
    /// set; a partial chart yields `None` and those annotations are
    /// omitted downstream.
    pub fn sapta_rashis(&self) -> Option<[Rashi; 7]> {
        let mut out = [Rashi::Mesha; 7];
        for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
            out[i] = self.rashi_of(*g)?;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(rashi: Rashi) -> GrahaPosition {
        GrahaPosition {
            rashi,
            longitude: rashi.index() as f64 * 30.0 + 15.0,
            retrograde: false,
        }
    }

    #[test]
    fn set_and_lookup() {
        let chart = Chart::new(Some(Rashi::Mesha)).with(Graha::Surya, pos(Rashi::Simha));
        assert_eq!(chart.rashi_of(Graha::Surya), Some(Rashi::Simha));
        assert_eq!(chart.rashi_of(Graha::Chandra), None);
    }

    #[test]
    fn sapta_rashis_requires_all_seven() {
        let mut chart = Chart::new(None);
        for g in SAPTA_GRAHAS.iter().take(6) {
            chart.set(*g, pos(Rashi::Tula));
        }
        assert!(chart.sapta_rashis().is_none());
        chart.set(Graha::Shani, pos(Rashi::Kumbha));
        let rashis = chart.sapta_rashis().unwrap();
        assert_eq!(rashis[6], Rashi::Kumbha);
    }

    #[test]
    fn iter_skips_missing() {
        let chart = Chart::new(None)
            .with(Graha::Chandra, pos(Rashi::Karka))
            .with(Graha::Ketu, pos(Rashi::Makara));
        let present: Vec<Graha> = chart.iter().map(|(g, _)| g).collect();
        assert_eq!(present, vec![Graha::Chandra, Graha::Ketu]);
    }
}
