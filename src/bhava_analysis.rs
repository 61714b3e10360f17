//! Per-house occupant, aspect, and lord analysis with aggregate scoring.
//!
//! For one house this classifies every occupant (by natural nature,
//! lordships, and own-sign placement), every aspecting graha, and the
//! house lord's placement and dignity, then folds occupant and aspect
//! verdicts — plus any supplied sensitive points — into a positive/
//! negative factor balance, a status, and a bounded strength score.
//!
//! The occupant precedence chain is first-match-wins and implemented
//! exactly once here; every consumer reads the same chain.

use serde::{Deserialize, Serialize};

use crate::bhava::{bhava_of, is_dusthana, is_kendra, is_trikona, rashi_of_bhava};
use crate::chart::Chart;
use crate::drishti::aspects_rashi;
use crate::graha::{ALL_GRAHAS, Graha, GrahaNature, rashi_lord};
use crate::maitri::{Dignity, Maitri, dignity_in_rashi, naisargika_maitri};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::providers::SpecialPoints;
use crate::rashi::Rashi;

/// Verdict for a single occupant or aspecting graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Influence {
    Positive,
    Negative,
    /// Counted toward neither side of the balance.
    Mixed,
    Neutral,
}

/// Aggregate status of a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BhavaStatus {
    Favorable,
    Challenging,
    Neutral,
}

/// One occupant of the analyzed house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupantAnalysis {
    pub graha: Graha,
    /// Houses this graha lords under the current ascendant (empty for
    /// Rahu/Ketu).
    pub lorded_bhavas: Vec<u8>,
    /// Whether the graha stands in one of its own signs.
    pub own_sign: bool,
    pub verdict: Influence,
}

/// One graha casting an aspect onto the analyzed house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectAnalysis {
    pub graha: Graha,
    /// House the aspect is cast from.
    pub from_bhava: u8,
    pub verdict: Influence,
}

/// Placement and dignity of the house's lord. Reported, not scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LordAnalysis {
    pub lord: Graha,
    /// House the lord currently occupies, if its position is known.
    pub placed_bhava: Option<u8>,
    pub placed_rashi: Option<Rashi>,
    pub dignity: Option<Dignity>,
    /// The lord's nakshatra, from its raw longitude.
    pub nakshatra: Option<Nakshatra>,
    /// Permanent relationship between the lord and its nakshatra's lord.
    pub nakshatra_lord_maitri: Option<Maitri>,
}

/// Complete analysis of one house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhavaAnalysis {
    /// House number, 1-12.
    pub number: u8,
    /// Sign occupying the house.
    pub rashi: Rashi,
    pub occupants: Vec<OccupantAnalysis>,
    pub aspecting: Vec<AspectAnalysis>,
    pub lord: LordAnalysis,
    pub positive_factors: u32,
    pub negative_factors: u32,
    pub status: BhavaStatus,
    /// Bounded derived metric: 50 at parity, +20 per net positive factor,
    /// clamped to [0, 100].
    pub strength_score: u8,
}

/// Houses lorded by a graha under the given ascendant.
pub fn lorded_bhavas(graha: Graha, lagna: Rashi) -> Vec<u8> {
    graha
        .own_rashis()
        .iter()
        .map(|r| bhava_of(*r, lagna))
        .collect()
}

/// Classify an occupant of a house. First match wins:
/// 6th lord → Negative; 8th lord → Negative unless it also lords a trine
/// (Mixed); 12th lord → Negative unless it also lords a trine or kendra
/// (Mixed); benefic lording a trine or kendra → Positive; malefic in its
/// own sign → Positive; malefic lording a kendra → Mixed; malefic
/// otherwise → Negative; else Neutral.
pub fn classify_occupant(graha: Graha, occupied: Rashi, lagna: Rashi) -> Influence {
    let lords = lorded_bhavas(graha, lagna);
    let lords_trine = lords.iter().any(|b| is_trikona(*b));
    let lords_kendra = lords.iter().any(|b| is_kendra(*b));

    if lords.contains(&6) {
        return Influence::Negative;
    }
    if lords.contains(&8) {
        return if lords_trine {
            Influence::Mixed
        } else {
            Influence::Negative
        };
    }
    if lords.contains(&12) {
        return if lords_trine || lords_kendra {
            Influence::Mixed
        } else {
            Influence::Negative
        };
    }

    let nature = graha.nature();
    if nature == GrahaNature::Benefic && (lords_trine || lords_kendra) {
        return Influence::Positive;
    }
    if nature == GrahaNature::Malefic {
        if graha.own_rashis().contains(&occupied) {
            return Influence::Positive;
        }
        if lords_kendra {
            return Influence::Mixed;
        }
        return Influence::Negative;
    }
    Influence::Neutral
}

/// Classify an aspecting graha: Positive if natural-benefic and not a
/// dusthana lord, Negative otherwise. No Mixed tier for aspects.
pub fn classify_aspect(graha: Graha, lagna: Rashi) -> Influence {
    let lords_dusthana = lorded_bhavas(graha, lagna)
        .iter()
        .any(|b| is_dusthana(*b));
    if graha.nature() == GrahaNature::Benefic && !lords_dusthana {
        Influence::Positive
    } else {
        Influence::Negative
    }
}

fn analyze_lord(chart: &Chart, house_rashi: Rashi, lagna: Rashi) -> LordAnalysis {
    let lord = rashi_lord(house_rashi);
    let position = chart.position(lord);
    let sapta = chart.sapta_rashis();

    let (placed_bhava, placed_rashi, dignity, nakshatra, nakshatra_lord_maitri) = match position {
        Some(p) => {
            let nak = nakshatra_from_longitude(p.longitude);
            let nak_lord = nak.nakshatra.lord();
            let maitri = if nak_lord == lord {
                Maitri::Sama
            } else {
                naisargika_maitri(lord, nak_lord)
            };
            (
                Some(bhava_of(p.rashi, lagna)),
                Some(p.rashi),
                Some(dignity_in_rashi(lord, p.rashi, sapta.as_ref())),
                Some(nak.nakshatra),
                Some(maitri),
            )
        }
        None => (None, None, None, None, None),
    };

    LordAnalysis {
        lord,
        placed_bhava,
        placed_rashi,
        dignity,
        nakshatra,
        nakshatra_lord_maitri,
    }
}

/// Analyze a single house (1-12). Returns None when the chart has no
/// ascendant. Panics on an out-of-range house number.
pub fn analyze_bhava(chart: &Chart, bhava: u8, points: &SpecialPoints) -> Option<BhavaAnalysis> {
    assert!((1..=12).contains(&bhava), "bhava must be 1-12, got {bhava}");
    let lagna = chart.lagna?;
    let house_rashi = rashi_of_bhava(bhava, lagna);

    let mut occupants = Vec::new();
    let mut aspecting = Vec::new();
    for g in ALL_GRAHAS {
        let Some(p) = chart.position(g) else { continue };
        if p.rashi == house_rashi {
            occupants.push(OccupantAnalysis {
                graha: g,
                lorded_bhavas: lorded_bhavas(g, lagna),
                own_sign: g.own_rashis().contains(&p.rashi),
                verdict: classify_occupant(g, p.rashi, lagna),
            });
        } else if aspects_rashi(g, p.rashi, house_rashi) {
            aspecting.push(AspectAnalysis {
                graha: g,
                from_bhava: bhava_of(p.rashi, lagna),
                verdict: classify_aspect(g, lagna),
            });
        }
    }

    let mut positive = occupants
        .iter()
        .filter(|o| o.verdict == Influence::Positive)
        .count() as u32
        + aspecting
            .iter()
            .filter(|a| a.verdict == Influence::Positive)
            .count() as u32;
    let mut negative = occupants
        .iter()
        .filter(|o| o.verdict == Influence::Negative)
        .count() as u32
        + aspecting
            .iter()
            .filter(|a| a.verdict == Influence::Negative)
            .count() as u32;

    // Sensitive points landing in this sign join the same balance
    if points.yogi == Some(house_rashi) {
        positive += 1;
    }
    if points.avayogi == Some(house_rashi) {
        negative += 1;
    }
    if points.dagdha_rashis.contains(&house_rashi) {
        negative += 1;
    }
    if points.tithi_shunya_rashis.contains(&house_rashi) {
        negative += 1;
    }

    let status = if positive > negative {
        BhavaStatus::Favorable
    } else if negative > positive {
        BhavaStatus::Challenging
    } else {
        BhavaStatus::Neutral
    };
    let strength_score =
        (50i32 + 20 * (positive as i32 - negative as i32)).clamp(0, 100) as u8;

    Some(BhavaAnalysis {
        number: bhava,
        rashi: house_rashi,
        occupants,
        aspecting,
        lord: analyze_lord(chart, house_rashi, lagna),
        positive_factors: positive,
        negative_factors: negative,
        status,
        strength_score,
    })
}

/// Analyze all 12 houses. Returns None when the chart has no ascendant.
pub fn analyze_all_bhavas(chart: &Chart, points: &SpecialPoints) -> Option<Vec<BhavaAnalysis>> {
    chart.lagna?;
    Some(
        (1..=12)
            .map(|b| analyze_bhava(chart, b, points).expect("lagna checked above"))
            .collect(),
    )
}
