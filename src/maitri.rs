//! Planetary friendship (maitri) and dignity.
//!
//! Three relationship layers over the sapta grahas:
//! - naisargika (permanent): a fixed BPHS table
//! - tatkalika (temporal): position-dependent, direction-sensitive
//! - panchadha (five-fold): composition of the two
//!
//! Matrices over all 7×7 classical pairs are produced for the
//! presentation layer; diagonals short-circuit to `Sva` before any rule
//! lookup. Sign-level dignity (exaltation through compound friendship
//! with the sign lord) also lives here since it reads the same tables.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, SAPTA_GRAHAS, rashi_lord};
use crate::rashi::Rashi;

/// Three-valued relationship, used for both the permanent and temporal
/// layers. The temporal house rule only ever produces Mitra or Shatru;
/// Sama is reachable in the permanent layer alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maitri {
    Mitra,
    Sama,
    Shatru,
}

/// Five-fold compound relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panchadha {
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

/// Cell of a permanent or temporal matrix: `Sva` on the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaitriCell {
    Sva,
    Mitra,
    Sama,
    Shatru,
}

/// Cell of the five-fold matrix: `Sva` on the diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanchadhaCell {
    Sva,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

/// 7×7 relationship table over the sapta grahas, row = source graha,
/// column = target graha, both indexed by `Graha::index()`.
pub type MaitriMatrix = [[MaitriCell; 7]; 7];

/// 7×7 five-fold table over the sapta grahas.
pub type PanchadhaMatrix = [[PanchadhaCell; 7]; 7];

/// Natural (naisargika) friendship between two sapta grahas (BPHS table).
/// Self-pairs and any pairing involving Rahu/Ketu return Sama.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    use Graha::*;
    use Maitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Sama,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn; neutral=Mercury
        (Surya, Chandra | Mangal | Guru) => Mitra,
        (Surya, Shukra | Shani) => Shatru,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Mitra,

        // Mars: friends=Sun,Moon,Jupiter; enemy=Mercury
        (Mangal, Surya | Chandra | Guru) => Mitra,
        (Mangal, Buddh) => Shatru,

        // Mercury: friends=Sun,Venus; enemy=Moon
        (Buddh, Surya | Shukra) => Mitra,
        (Buddh, Chandra) => Shatru,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Mitra,
        (Guru, Buddh | Shukra) => Shatru,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Mitra,
        (Shukra, Surya | Chandra) => Shatru,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Mitra,
        (Shani, Surya | Chandra | Mangal) => Shatru,

        _ => Sama,
    }
}

/// Temporal (tatkalika) friendship from current rashi positions: friend if
/// `other` sits in the 2nd/3rd/4th/10th/11th/12th sign from `graha`.
/// Direction-sensitive; tatkalika(A,B) need not equal tatkalika(B,A).
pub const fn tatkalika_maitri(graha_rashi: Rashi, other_rashi: Rashi) -> Maitri {
    let dist = ((other_rashi.index() as i16 - graha_rashi.index() as i16 + 12) % 12) as u8;
    match dist {
        1 | 2 | 3 | 9 | 10 | 11 => Maitri::Mitra,
        _ => Maitri::Shatru, // 0 (same sign), 4, 5, 6, 7, 8
    }
}

/// Combine permanent and temporal friendship into the five-fold
/// relationship. Total over all 9 input pairs.
pub const fn panchadha_maitri(naisargika: Maitri, tatkalika: Maitri) -> Panchadha {
    use Maitri as M;
    use Panchadha as P;

    match (naisargika, tatkalika) {
        (M::Mitra, M::Mitra) => P::AdhiMitra,
        (M::Mitra, M::Sama) => P::Mitra,
        (M::Mitra, M::Shatru) => P::Sama,
        (M::Sama, M::Mitra) => P::Mitra,
        (M::Sama, M::Sama) => P::Sama,
        (M::Sama, M::Shatru) => P::Shatru,
        (M::Shatru, M::Mitra) => P::Sama,
        (M::Shatru, M::Sama) => P::Shatru,
        (M::Shatru, M::Shatru) => P::AdhiShatru,
    }
}

const fn maitri_cell(m: Maitri) -> MaitriCell {
    match m {
        Maitri::Mitra => MaitriCell::Mitra,
        Maitri::Sama => MaitriCell::Sama,
        Maitri::Shatru => MaitriCell::Shatru,
    }
}

/// The permanent 7×7 matrix. Pure function of the fixed table.
pub fn naisargika_matrix() -> MaitriMatrix {
    let mut cells = [[MaitriCell::Sva; 7]; 7];
    for a in SAPTA_GRAHAS {
        for b in SAPTA_GRAHAS {
            if a != b {
                cells[a.index() as usize][b.index() as usize] =
                    maitri_cell(naisargika_maitri(a, b));
            }
        }
    }
    cells
}

/// The temporal 7×7 matrix for the given sapta graha rashi positions
/// (indexed by `Graha::index()`).
pub fn tatkalika_matrix(sapta_rashis: &[Rashi; 7]) -> MaitriMatrix {
    let mut cells = [[MaitriCell::Sva; 7]; 7];
    for a in SAPTA_GRAHAS {
        for b in SAPTA_GRAHAS {
            if a != b {
                let m = tatkalika_maitri(
                    sapta_rashis[a.index() as usize],
                    sapta_rashis[b.index() as usize],
                );
                cells[a.index() as usize][b.index() as usize] = maitri_cell(m);
            }
        }
    }
    cells
}

/// The five-fold 7×7 matrix: composition of the permanent table with the
/// temporal relation for the given positions.
pub fn panchadha_matrix(sapta_rashis: &[Rashi; 7]) -> PanchadhaMatrix {
    let mut cells = [[PanchadhaCell::Sva; 7]; 7];
    for a in SAPTA_GRAHAS {
        for b in SAPTA_GRAHAS {
            if a == b {
                continue;
            }
            let nais = naisargika_maitri(a, b);
            let tatk = tatkalika_maitri(
                sapta_rashis[a.index() as usize],
                sapta_rashis[b.index() as usize],
            );
            cells[a.index() as usize][b.index() as usize] = match panchadha_maitri(nais, tatk) {
                Panchadha::AdhiMitra => PanchadhaCell::AdhiMitra,
                Panchadha::Mitra => PanchadhaCell::Mitra,
                Panchadha::Sama => PanchadhaCell::Sama,
                Panchadha::Shatru => PanchadhaCell::Shatru,
                Panchadha::AdhiShatru => PanchadhaCell::AdhiShatru,
            };
        }
    }
    cells
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Sign-level dignity of a graha in a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

/// Exaltation rashi for sapta grahas. None for Rahu/Ketu.
///
/// Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya, Jupiter Karka,
/// Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi = 7th sign from exaltation. None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(Rashi::from_index((r.index() + 6) % 12)),
        None => None,
    }
}

/// Sign-level dignity of a graha in a rashi, with compound friendship when
/// the full classical position set is available.
///
/// Priority: exaltation > debilitation > own sign > panchadha relationship
/// with the rashi lord (naisargika only when `sapta_rashis` is None).
/// Rahu/Ketu are always Sama.
pub fn dignity_in_rashi(graha: Graha, rashi: Rashi, sapta_rashis: Option<&[Rashi; 7]>) -> Dignity {
    if !graha.is_classical() {
        return Dignity::Sama;
    }
    if exaltation_rashi(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_rashi(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    let lord = rashi_lord(rashi);
    if lord == graha {
        return Dignity::OwnSign;
    }

    match sapta_rashis {
        Some(positions) => {
            let nais = naisargika_maitri(graha, lord);
            let tatk = tatkalika_maitri(
                positions[graha.index() as usize],
                positions[lord.index() as usize],
            );
            match panchadha_maitri(nais, tatk) {
                Panchadha::AdhiMitra => Dignity::AdhiMitra,
                Panchadha::Mitra => Dignity::Mitra,
                Panchadha::Sama => Dignity::Sama,
                Panchadha::Shatru => Dignity::Shatru,
                Panchadha::AdhiShatru => Dignity::AdhiShatru,
            }
        }
        None => match naisargika_maitri(graha, lord) {
            Maitri::Mitra => Dignity::Mitra,
            Maitri::Sama => Dignity::Sama,
            Maitri::Shatru => Dignity::Shatru,
        },
    }
}
