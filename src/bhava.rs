//! Whole-sign bhava (house) geometry.
//!
//! House 1 is the ascendant's sign; every sign is one full house. The
//! conversion is pure offset arithmetic mod 12 and is total over all sign
//! pairs. House numbers are 1-12 throughout the crate; passing anything
//! else is a caller contract violation.

use crate::rashi::Rashi;

/// Kendra (angular) houses.
pub const KENDRA_BHAVAS: [u8; 4] = [1, 4, 7, 10];

/// Trikona (trine) houses.
pub const TRIKONA_BHAVAS: [u8; 3] = [1, 5, 9];

/// Dusthana (difficult) houses.
pub const DUSTHANA_BHAVAS: [u8; 3] = [6, 8, 12];

/// House number (1-12) of a sign for a given ascendant sign.
pub const fn bhava_of(rashi: Rashi, lagna: Rashi) -> u8 {
    ((rashi.index() as i16 - lagna.index() as i16 + 12) % 12) as u8 + 1
}

/// Sign occupying a house (1-12) for a given ascendant sign.
///
/// Panics if `bhava` is outside 1-12.
pub fn rashi_of_bhava(bhava: u8, lagna: Rashi) -> Rashi {
    assert!((1..=12).contains(&bhava), "bhava must be 1-12, got {bhava}");
    Rashi::from_index(((lagna.index() as u16 + bhava as u16 - 1) % 12) as u8)
}

/// Whether a house is a kendra (1/4/7/10).
pub const fn is_kendra(bhava: u8) -> bool {
    matches!(bhava, 1 | 4 | 7 | 10)
}

/// Whether a house is a trikona (1/5/9).
pub const fn is_trikona(bhava: u8) -> bool {
    matches!(bhava, 1 | 5 | 9)
}

/// Whether a house is a dusthana (6/8/12).
pub const fn is_dusthana(bhava: u8) -> bool {
    matches!(bhava, 6 | 8 | 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;
    use proptest::prelude::*;

    #[test]
    fn lagna_sign_is_house_1() {
        for lagna in ALL_RASHIS {
            assert_eq!(bhava_of(lagna, lagna), 1);
        }
    }

    #[test]
    fn known_placements() {
        // Lagna Simha (4): Vrischika (7) is the 4th house
        assert_eq!(bhava_of(Rashi::Vrischika, Rashi::Simha), 4);
        // Lagna Makara (9): Mesha (0) is the 4th house
        assert_eq!(bhava_of(Rashi::Mesha, Rashi::Makara), 4);
        // Lagna Mesha: Meena is the 12th house
        assert_eq!(bhava_of(Rashi::Meena, Rashi::Mesha), 12);
    }

    #[test]
    fn house_sets() {
        assert!(is_kendra(7) && !is_kendra(5));
        assert!(is_trikona(9) && !is_trikona(10));
        assert!(is_dusthana(8) && !is_dusthana(9));
    }

    #[test]
    #[should_panic(expected = "bhava must be 1-12")]
    fn out_of_range_house_panics() {
        let _ = rashi_of_bhava(13, Rashi::Mesha);
    }

    proptest! {
        #[test]
        fn round_trip(sign in 0u8..12, lagna in 0u8..12) {
            let sign = Rashi::from_index(sign);
            let lagna = Rashi::from_index(lagna);
            let house = bhava_of(sign, lagna);
            prop_assert!((1..=12).contains(&house));
            prop_assert_eq!(rashi_of_bhava(house, lagna), sign);
        }
    }
}
