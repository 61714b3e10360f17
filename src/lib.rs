//! Vedic chart interpretation: house analysis, yoga detection, planetary
//! friendship matrices, and cascading dasha period selection.
//!
//! The crate consumes an already-computed natal chart (sidereal positions
//! and ascendant from an external provider) and derives the interpretive
//! structures a presentation layer renders. The rule engines — house
//! analysis, yoga detection, friendship matrices — are pure, synchronous
//! functions over an immutable [`Chart`] snapshot. The dasha hierarchy is
//! the one stateful, asynchronous component: [`DashaSelectionState`]
//! orchestrates the five-level cascade against an external period
//! calculator.
//!
//! Ephemeris computation, chart rendering, and persistence are all
//! outside this crate.

pub mod bhava;
pub mod bhava_analysis;
pub mod chart;
pub mod dasha;
pub mod drishti;
pub mod graha;
pub mod maitri;
pub mod nakshatra;
pub mod providers;
pub mod rashi;
pub mod util;
pub mod yoga;

pub use bhava::{bhava_of, is_dusthana, is_kendra, is_trikona, rashi_of_bhava};
pub use bhava_analysis::{
    BhavaAnalysis, BhavaStatus, Influence, analyze_all_bhavas, analyze_bhava,
};
pub use chart::{Chart, GrahaPosition};
pub use dasha::{
    BirthData, DashaCalculator, DashaError, DashaLevel, DashaPeriod, DashaSelection,
    DashaSelectionState,
};
pub use drishti::aspects_rashi;
pub use graha::{ALL_GRAHAS, Graha, GrahaNature, SAPTA_GRAHAS, rashi_lord};
pub use maitri::{
    Dignity, Maitri, MaitriMatrix, Panchadha, PanchadhaMatrix, dignity_in_rashi,
    naisargika_matrix, panchadha_matrix, tatkalika_matrix,
};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use providers::{InterpretationProvider, SpecialPointProvider, SpecialPoints};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use yoga::{Yoga, YogaCategory, YogaStrength, detect_yogas};
