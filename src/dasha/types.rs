//! Core types for the five-level Vimshottari dasha hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graha::Graha;

/// The five nested dasha levels, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Maha,
    Antar,
    Pratyantar,
    Sookshma,
    Prana,
}

/// All levels in nesting order.
pub const ALL_LEVELS: [DashaLevel; 5] = [
    DashaLevel::Maha,
    DashaLevel::Antar,
    DashaLevel::Pratyantar,
    DashaLevel::Sookshma,
    DashaLevel::Prana,
];

impl DashaLevel {
    /// 0-based depth, Maha = 0.
    pub const fn index(self) -> usize {
        match self {
            Self::Maha => 0,
            Self::Antar => 1,
            Self::Pratyantar => 2,
            Self::Sookshma => 3,
            Self::Prana => 4,
        }
    }

    /// Next level down, None below Prana.
    pub const fn child(self) -> Option<DashaLevel> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => Some(Self::Sookshma),
            Self::Sookshma => Some(Self::Prana),
            Self::Prana => None,
        }
    }

    /// Next level up, None above Maha.
    pub const fn parent(self) -> Option<DashaLevel> {
        match self {
            Self::Maha => None,
            Self::Antar => Some(Self::Maha),
            Self::Pratyantar => Some(Self::Antar),
            Self::Sookshma => Some(Self::Pratyantar),
            Self::Prana => Some(Self::Sookshma),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Maha",
            Self::Antar => "Antar",
            Self::Pratyantar => "Pratyantar",
            Self::Sookshma => "Sookshma",
            Self::Prana => "Prana",
        }
    }
}

impl fmt::Display for DashaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One planet-ruled period at some level. Intervals are Julian Day
/// numbers, half-open: `[start_jd, end_jd)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub graha: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub level: DashaLevel,
}

impl DashaPeriod {
    /// Whether the instant falls inside this period.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    /// Whether this period lies entirely within `parent`'s interval.
    ///
    /// End instants compare inclusively: a child ending exactly at its
    /// parent's end is still nested.
    pub fn nested_in(&self, parent: &DashaPeriod) -> bool {
        self.start_jd >= parent.start_jd && self.end_jd <= parent.end_jd
    }
}

/// The per-level selection snapshot handed to the presentation layer.
///
/// At most one period per level; an entry may exist only when every
/// ancestor level is also selected and intervals nest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashaSelection {
    periods: [Option<DashaPeriod>; 5],
}

impl DashaSelection {
    pub(crate) fn new(periods: [Option<DashaPeriod>; 5]) -> Self {
        Self { periods }
    }

    /// Selected period at a level, if any.
    pub fn at(&self, level: DashaLevel) -> Option<&DashaPeriod> {
        self.periods[level.index()].as_ref()
    }

    /// Number of consecutively selected levels from Maha down.
    pub fn depth(&self) -> usize {
        self.periods.iter().take_while(|p| p.is_some()).count()
    }

    /// Check the nesting invariant: selections form a contiguous prefix of
    /// the levels and each child's interval lies inside its parent's.
    pub fn is_consistent(&self) -> bool {
        let depth = self.depth();
        if self.periods[depth..].iter().any(|p| p.is_some()) {
            return false;
        }
        self.periods[..depth]
            .windows(2)
            .all(|w| match (&w[0], &w[1]) {
                (Some(parent), Some(child)) => child.nested_in(parent),
                _ => true,
            })
    }
}

/// Failures surfaced by the dasha selection state machine.
#[derive(Debug, Error)]
pub enum DashaError {
    /// The external period calculator failed for a level.
    #[error("period calculator failed at {level} level: {message}")]
    Calculator { level: DashaLevel, message: String },

    /// The calculator returned no periods for a level.
    #[error("no periods returned at {level} level")]
    EmptyPeriods { level: DashaLevel },

    /// A selection event violated the API contract (unknown index, or a
    /// level whose ancestors are not selected).
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}
