//! Seams for external collaborators consumed by the rule engines.
//!
//! Special sensitive points (Yogi, Avayogi, Dagdha Rashi, Tithi Shunya)
//! are computed from panchanga data this layer does not have; house
//! analysis folds them in when supplied and silently omits them when not.
//! Interpretation text is likewise a pure lookup owned by the caller.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::graha::Graha;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// Sensitive points supplied by an external panchanga service.
///
/// `Default` is the fully-absent state; every field degrades to "no
/// effect" when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialPoints {
    /// Sign holding the Yogi point (adds one positive factor to its house).
    pub yogi: Option<Rashi>,
    /// Sign holding the Avayogi point (adds one negative factor).
    pub avayogi: Option<Rashi>,
    /// Combust signs (each adds one negative factor to its house).
    pub dagdha_rashis: Vec<Rashi>,
    /// Tithi Shunya signs (each adds one negative factor to its house).
    pub tithi_shunya_rashis: Vec<Rashi>,
}

/// Provider of special sensitive points for a chart.
pub trait SpecialPointProvider {
    /// Points for the given chart, or None if the provider has no data.
    fn special_points(&self, chart: &Chart) -> Option<SpecialPoints>;
}

/// Provider of human-readable interpretation text.
///
/// Purely a lookup over planet × nakshatra × house combinations; the core
/// never generates prose itself.
pub trait InterpretationProvider {
    /// Interpretation for a graha in a nakshatra in a house, if any.
    fn interpretation(&self, graha: Graha, nakshatra: Nakshatra, bhava: u8) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_are_absent() {
        let p = SpecialPoints::default();
        assert!(p.yogi.is_none());
        assert!(p.avayogi.is_none());
        assert!(p.dagdha_rashis.is_empty());
        assert!(p.tithi_shunya_rashis.is_empty());
    }
}
