//! The 9 grahas (planets) and their fixed classifications.
//!
//! Sign lordship and the natural benefic/malefic split are universal Vedic
//! conventions (BPHS); every rule engine in this crate reads them from here
//! so the tables exist exactly once.

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// Friendship matrices and several yoga rules only consider these.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Natural interpretive nature of a graha.
///
/// This is the 3-way split used by house classification: Mercury is neither
/// benefic nor malefic here (its effect follows its lordships instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrahaNature {
    Benefic,
    Malefic,
    Neutral,
}

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Whether this graha is one of the sapta grahas (not a lunar node).
    pub const fn is_classical(self) -> bool {
        !matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Natural nature for house classification.
    ///
    /// Benefics: Jupiter, Venus, Moon. Malefics: Mars, Saturn, Sun, Rahu,
    /// Ketu. Mercury: Neutral.
    pub const fn nature(self) -> GrahaNature {
        match self {
            Self::Guru | Self::Shukra | Self::Chandra => GrahaNature::Benefic,
            Self::Buddh => GrahaNature::Neutral,
            Self::Mangal | Self::Shani | Self::Surya | Self::Rahu | Self::Ketu => {
                GrahaNature::Malefic
            }
        }
    }

    /// Rashis owned by this graha. Empty for Rahu/Ketu.
    pub const fn own_rashis(self) -> &'static [Rashi] {
        match self {
            Self::Surya => &[Rashi::Simha],
            Self::Chandra => &[Rashi::Karka],
            Self::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
            Self::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
            Self::Guru => &[Rashi::Dhanu, Rashi::Meena],
            Self::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
            Self::Shani => &[Rashi::Makara, Rashi::Kumbha],
            Self::Rahu | Self::Ketu => &[],
        }
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard BPHS lordship: Mesha/Vrischika → Mangal, Vrishabha/Tula →
/// Shukra, Mithuna/Kanya → Buddh, Karka → Chandra, Simha → Surya,
/// Dhanu/Meena → Guru, Makara/Kumbha → Shani.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn sapta_excludes_nodes() {
        assert!(!SAPTA_GRAHAS.contains(&Graha::Rahu));
        assert!(!SAPTA_GRAHAS.contains(&Graha::Ketu));
        assert_eq!(SAPTA_GRAHAS.len(), 7);
    }

    #[test]
    fn mercury_is_neutral() {
        assert_eq!(Graha::Buddh.nature(), GrahaNature::Neutral);
    }

    #[test]
    fn nodes_are_malefic() {
        assert_eq!(Graha::Rahu.nature(), GrahaNature::Malefic);
        assert_eq!(Graha::Ketu.nature(), GrahaNature::Malefic);
    }

    #[test]
    fn benefics() {
        for g in [Graha::Guru, Graha::Shukra, Graha::Chandra] {
            assert_eq!(g.nature(), GrahaNature::Benefic);
        }
    }

    #[test]
    fn lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn every_rashi_has_a_lord() {
        for r in ALL_RASHIS {
            let lord = rashi_lord(r);
            assert!(lord.own_rashis().contains(&r), "{:?} owns {:?}", lord, r);
        }
    }

    #[test]
    fn nodes_own_nothing() {
        assert!(Graha::Rahu.own_rashis().is_empty());
        assert!(Graha::Ketu.own_rashis().is_empty());
    }
}
