//! Five-level Vimshottari dasha hierarchy: period types, the external
//! calculator seam, and the cascading selection state machine.

pub mod calculator;
pub mod selection;
pub mod types;

pub use calculator::{BirthData, DashaCalculator};
pub use selection::DashaSelectionState;
pub use types::{ALL_LEVELS, DashaError, DashaLevel, DashaPeriod, DashaSelection};
