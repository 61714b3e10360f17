//! Whole-sign graha drishti (planetary aspects).
//!
//! Every graha aspects the 7th sign from its own, except the nodes. Mars
//! additionally aspects its 4th and 8th, Jupiter its 5th and 9th, Saturn
//! its 3rd and 10th. Rahu and Ketu aspect the 3rd and 11th signs in place
//! of the standard 7th.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Aspected house offsets from a graha's own sign (1-based inclusive
/// counting: 7 = opposition).
pub const fn drishti_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Rahu | Graha::Ketu => &[3, 11],
        _ => &[7],
    }
}

/// Whether `graha` placed in `from` casts an aspect on `target`.
pub fn aspects_rashi(graha: Graha, from: Rashi, target: Rashi) -> bool {
    let dist = ((target.index() as i16 - from.index() as i16 + 12) % 12) as u8 + 1;
    drishti_offsets(graha).contains(&dist)
}
