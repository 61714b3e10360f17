//! Classical yoga (planetary combination) detection.
//!
//! A fixed, ordered catalog of independent detectors. Each detector is a
//! pure predicate over the chart producing zero or one [`Yoga`]; no
//! detector reads another's output, so the catalog order only fixes the
//! order of the result list. Detectors that need a datum the chart does
//! not carry (ascendant, a node position) return `None` instead of
//! failing.

use serde::{Deserialize, Serialize};

use crate::bhava::{bhava_of, is_kendra};
use crate::chart::Chart;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::maitri::{debilitation_rashi, exaltation_rashi};
use crate::rashi::Rashi;

/// Broad classification of a yoga's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaCategory {
    Raja,
    Dhana,
    Buddhi,
    Netritva,
    Samriddhi,
    Mahapurusha,
    Dosha,
}

/// Strength tier of a detected yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaStrength {
    VeryStrong,
    Strong,
    Medium,
    /// Afflicting combinations (doshas).
    Negative,
}

/// A detected planetary combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub name: &'static str,
    pub category: YogaCategory,
    pub strength: YogaStrength,
    pub involved_grahas: Vec<Graha>,
    pub involved_rashis: Vec<Rashi>,
    pub description: &'static str,
    pub effects: &'static str,
    /// Remedy text, present for doshas only.
    pub remedies: Option<&'static str>,
}

/// Signed sign distance from `from` to `to`, 0-11.
const fn sign_distance(from: Rashi, to: Rashi) -> u8 {
    ((to.index() as i16 - from.index() as i16 + 12) % 12) as u8
}

// ---------------------------------------------------------------------------
// Conjunction and kendra yogas
// ---------------------------------------------------------------------------

/// Gaja Kesari: Jupiter in a kendra (1/4/7/10) counted from the Moon.
pub fn gaja_kesari(chart: &Chart) -> Option<Yoga> {
    let moon = chart.rashi_of(Graha::Chandra)?;
    let jupiter = chart.rashi_of(Graha::Guru)?;
    let dist = sign_distance(moon, jupiter);
    if !matches!(dist, 0 | 3 | 6 | 9) {
        return None;
    }
    Some(Yoga {
        name: "Gaja Kesari",
        category: YogaCategory::Raja,
        strength: YogaStrength::Strong,
        involved_grahas: vec![Graha::Chandra, Graha::Guru],
        involved_rashis: vec![moon, jupiter],
        description: "Guru occupies a kendra from Chandra.",
        effects: "Confers fame, lasting reputation, intelligence and success over adversaries.",
        remedies: None,
    })
}

fn conjunction(
    chart: &Chart,
    a: Graha,
    b: Graha,
    name: &'static str,
    category: YogaCategory,
    strength: YogaStrength,
    description: &'static str,
    effects: &'static str,
) -> Option<Yoga> {
    let ra = chart.rashi_of(a)?;
    let rb = chart.rashi_of(b)?;
    if ra != rb {
        return None;
    }
    Some(Yoga {
        name,
        category,
        strength,
        involved_grahas: vec![a, b],
        involved_rashis: vec![ra],
        description,
        effects,
        remedies: None,
    })
}

/// Chandra-Mangal: Moon and Mars conjunct.
pub fn chandra_mangal(chart: &Chart) -> Option<Yoga> {
    conjunction(
        chart,
        Graha::Chandra,
        Graha::Mangal,
        "Chandra-Mangal",
        YogaCategory::Dhana,
        YogaStrength::Medium,
        "Chandra and Mangal share a rashi.",
        "Earnings through enterprise and drive; material gains with restless energy.",
    )
}

/// Budh-Aditya: Sun and Mercury conjunct.
pub fn budh_aditya(chart: &Chart) -> Option<Yoga> {
    conjunction(
        chart,
        Graha::Surya,
        Graha::Buddh,
        "Budh-Aditya",
        YogaCategory::Buddhi,
        YogaStrength::Medium,
        "Surya and Buddh share a rashi.",
        "Sharp intellect, skill in communication, administrative ability.",
    )
}

/// Guru-Mangal: Jupiter and Mars conjunct.
pub fn guru_mangal(chart: &Chart) -> Option<Yoga> {
    conjunction(
        chart,
        Graha::Guru,
        Graha::Mangal,
        "Guru-Mangal",
        YogaCategory::Netritva,
        YogaStrength::Strong,
        "Guru and Mangal share a rashi.",
        "Energetic leadership guided by wisdom; success in directing others.",
    )
}

/// Shukra-Guru: Venus and Jupiter conjunct.
pub fn shukra_guru(chart: &Chart) -> Option<Yoga> {
    conjunction(
        chart,
        Graha::Shukra,
        Graha::Guru,
        "Shukra-Guru",
        YogaCategory::Samriddhi,
        YogaStrength::Strong,
        "Shukra and Guru share a rashi.",
        "Prosperity, refinement and comfort through the union of the two gurus.",
    )
}

// ---------------------------------------------------------------------------
// Pancha Mahapurusha
// ---------------------------------------------------------------------------

fn mahapurusha(
    chart: &Chart,
    graha: Graha,
    name: &'static str,
    effects: &'static str,
) -> Option<Yoga> {
    let lagna = chart.lagna?;
    let rashi = chart.rashi_of(graha)?;
    if !is_kendra(bhava_of(rashi, lagna)) {
        return None;
    }
    let dignified =
        Some(rashi) == exaltation_rashi(graha) || graha.own_rashis().contains(&rashi);
    if !dignified {
        return None;
    }
    Some(Yoga {
        name,
        category: YogaCategory::Mahapurusha,
        strength: YogaStrength::VeryStrong,
        involved_grahas: vec![graha],
        involved_rashis: vec![rashi],
        description: "A dignified graha stands in a kendra from the lagna.",
        effects,
        remedies: None,
    })
}

/// Ruchaka: Mars exalted or own-sign in a kendra.
pub fn ruchaka(chart: &Chart) -> Option<Yoga> {
    mahapurusha(
        chart,
        Graha::Mangal,
        "Ruchaka",
        "Courage, physical strength, command over others.",
    )
}

/// Bhadra: Mercury exalted or own-sign in a kendra.
pub fn bhadra(chart: &Chart) -> Option<Yoga> {
    mahapurusha(
        chart,
        Graha::Buddh,
        "Bhadra",
        "Learning, eloquence, long-lived intellect.",
    )
}

/// Hamsa: Jupiter exalted or own-sign in a kendra.
pub fn hamsa(chart: &Chart) -> Option<Yoga> {
    mahapurusha(
        chart,
        Graha::Guru,
        "Hamsa",
        "Righteousness, respect of the learned, spiritual inclination.",
    )
}

/// Malavya: Venus exalted or own-sign in a kendra.
pub fn malavya(chart: &Chart) -> Option<Yoga> {
    mahapurusha(
        chart,
        Graha::Shukra,
        "Malavya",
        "Comforts, artistic refinement, marital happiness.",
    )
}

/// Sasha: Saturn exalted or own-sign in a kendra.
pub fn sasha(chart: &Chart) -> Option<Yoga> {
    mahapurusha(
        chart,
        Graha::Shani,
        "Sasha",
        "Authority over many, discipline, gains through service and land.",
    )
}

// ---------------------------------------------------------------------------
// Cancellation and affliction yogas
// ---------------------------------------------------------------------------

/// Neecha Bhanga Raja: a debilitated graha shares its sign with a classical
/// graha exalted there, cancelling the debilitation.
pub fn neecha_bhanga(chart: &Chart) -> Option<Yoga> {
    for debilitated in SAPTA_GRAHAS {
        let Some(rashi) = chart.rashi_of(debilitated) else {
            continue;
        };
        if Some(rashi) != debilitation_rashi(debilitated) {
            continue;
        }
        for canceller in SAPTA_GRAHAS {
            if canceller == debilitated {
                continue;
            }
            if chart.rashi_of(canceller) == Some(rashi)
                && exaltation_rashi(canceller) == Some(rashi)
            {
                return Some(Yoga {
                    name: "Neecha Bhanga Raja",
                    category: YogaCategory::Raja,
                    strength: YogaStrength::Strong,
                    involved_grahas: vec![debilitated, canceller],
                    involved_rashis: vec![rashi],
                    description:
                        "A debilitated graha shares its rashi with a graha exalted there.",
                    effects: "The debilitation is cancelled; rise after early struggle.",
                    remedies: None,
                });
            }
        }
    }
    None
}

/// Kala Sarpa: all seven classical grahas strictly inside the zodiacal arc
/// from Rahu to Ketu.
pub fn kala_sarpa(chart: &Chart) -> Option<Yoga> {
    let rahu = chart.rashi_of(Graha::Rahu)?;
    let ketu = chart.rashi_of(Graha::Ketu)?;
    if rahu == ketu {
        return None;
    }
    let (r, k) = (rahu.index(), ketu.index());
    let mut involved = Vec::with_capacity(7);
    for g in SAPTA_GRAHAS {
        let p = chart.rashi_of(g)?.index();
        let inside = if r < k {
            r < p && p < k
        } else {
            p > r || p < k
        };
        if !inside {
            return None;
        }
        involved.push(g);
    }
    involved.push(Graha::Rahu);
    involved.push(Graha::Ketu);
    Some(Yoga {
        name: "Kala Sarpa",
        category: YogaCategory::Dosha,
        strength: YogaStrength::Negative,
        involved_grahas: involved,
        involved_rashis: vec![rahu, ketu],
        description: "All classical grahas are hemmed within the Rahu-Ketu axis.",
        effects: "Obstructed progress and delayed results until the dosha's grip eases.",
        remedies: Some(
            "Worship of the nagas, Rahu-Ketu shanti, and recitation of the Maha Mrityunjaya mantra.",
        ),
    })
}

/// Kemadrum: the Moon with no classical graha in its own sign or either
/// adjacent sign.
pub fn kemadrum(chart: &Chart) -> Option<Yoga> {
    let moon = chart.rashi_of(Graha::Chandra)?;
    let neighbors = [moon, moon.nth_from(2), moon.nth_from(12)];
    for g in SAPTA_GRAHAS {
        if g == Graha::Chandra {
            continue;
        }
        let rashi = chart.rashi_of(g)?;
        if neighbors.contains(&rashi) {
            return None;
        }
    }
    Some(Yoga {
        name: "Kemadrum",
        category: YogaCategory::Dosha,
        strength: YogaStrength::Negative,
        involved_grahas: vec![Graha::Chandra],
        involved_rashis: vec![moon],
        description: "Chandra stands unsupported, with no classical graha beside it.",
        effects: "Emotional isolation and fluctuating fortunes from an unsupported Moon.",
        remedies: Some(
            "Strengthen Chandra: Monday fasting, white offerings, and Chandra mantra japa.",
        ),
    })
}

/// Run the full detector catalog in its fixed order.
pub fn detect_yogas(chart: &Chart) -> Vec<Yoga> {
    let detectors: [fn(&Chart) -> Option<Yoga>; 13] = [
        gaja_kesari,
        chandra_mangal,
        budh_aditya,
        guru_mangal,
        shukra_guru,
        ruchaka,
        bhadra,
        hamsa,
        malavya,
        sasha,
        neecha_bhanga,
        kala_sarpa,
        kemadrum,
    ];
    detectors.iter().filter_map(|d| d(chart)).collect()
}
