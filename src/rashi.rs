//! Rashi (zodiac sign) enum and longitude → sign resolution.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Chart providers supply the sign
//! alongside each longitude; this module re-derives it only where a rule
//! needs a sign from a raw degree value.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi from 0-based index. Total for all inputs: the index is taken
    /// mod 12, so offset arithmetic can feed this directly.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// The n-th rashi counted inclusively from this one (1 = same sign,
    /// 2 = next sign, 12 = previous sign).
    pub const fn nth_from(self, offset: u8) -> Rashi {
        Rashi::from_index(((self.index() as u16 + offset as u16 - 1) % 12) as u8)
    }
}

/// Determine the rashi for a sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha =
/// [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp guards the floating point edge at exactly 360.0
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn all_boundaries() {
        for i in 0..12u8 {
            assert_eq!(rashi_from_longitude(i as f64 * 30.0).index(), i);
        }
    }

    #[test]
    fn mid_sign() {
        assert_eq!(rashi_from_longitude(45.5), Rashi::Vrishabha);
    }

    #[test]
    fn wrap_around_and_negative() {
        assert_eq!(rashi_from_longitude(365.0), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(-10.0), Rashi::Meena);
    }

    #[test]
    fn nth_from_wraps() {
        assert_eq!(Rashi::Mesha.nth_from(1), Rashi::Mesha);
        assert_eq!(Rashi::Meena.nth_from(2), Rashi::Mesha);
        assert_eq!(Rashi::Mesha.nth_from(8), Rashi::Vrischika);
    }
}
