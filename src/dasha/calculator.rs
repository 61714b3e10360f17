//! Seam to the external dasha period calculator.
//!
//! Period arithmetic (Vimshottari proportions, level subdivision) lives
//! outside this crate; the state machine only orchestrates fetches and
//! selection. Each fetch is a suspending call, so the trait is async.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::types::{DashaError, DashaLevel, DashaPeriod};

/// Birth inputs the calculator needs to anchor the period tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// Julian Day of birth.
    pub birth_jd: f64,
    /// Sidereal longitude of the Moon at birth, degrees [0, 360).
    /// Determines the opening Maha lord and its elapsed fraction.
    pub moon_longitude: f64,
}

/// External service producing the period lists for each level.
#[async_trait]
pub trait DashaCalculator: Send + Sync {
    /// The full Maha-level period list for a birth.
    async fn maha_periods(&self, birth: &BirthData) -> Result<Vec<DashaPeriod>, DashaError>;

    /// Subdivide `parent` into `level` periods. `ancestor_lords` are the
    /// selected lords from Maha down to and including `parent`.
    async fn sub_periods(
        &self,
        birth: &BirthData,
        parent: &DashaPeriod,
        level: DashaLevel,
        ancestor_lords: &[Graha],
    ) -> Result<Vec<DashaPeriod>, DashaError>;
}
