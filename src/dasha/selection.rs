//! Cascading selection state for the five-level dasha hierarchy.
//!
//! A single [`DashaSelectionState`] per loaded chart. It is driven by
//! three events: initial load, user selection of a period at some level,
//! and reference-date navigation. Every event settles the full chain from
//! the affected level down before returning, fetching one level at a time
//! (each level's request is parameterized by its ancestors' lords, so the
//! fetches cannot fan out in parallel).
//!
//! State is committed per completed level, between suspension points: if
//! an event future is dropped mid-cascade the struct is left holding a
//! valid prefix (cleared below the last committed level), never a child
//! whose parent no longer matches.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::graha::Graha;

use super::calculator::{BirthData, DashaCalculator};
use super::types::{ALL_LEVELS, DashaError, DashaLevel, DashaPeriod, DashaSelection};

/// Pick the period containing `jd`, clamping to the nearest end when `jd`
/// falls outside the list's span (a pinned ancestor need not contain the
/// reference date; its children are then chosen from the closest edge).
fn pick(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    if let Some(p) = periods.iter().find(|p| p.contains(jd)) {
        return Some(p);
    }
    let first = periods.first()?;
    if jd < first.start_jd {
        return Some(first);
    }
    periods.last()
}

/// Live selection state for one chart's dasha hierarchy.
pub struct DashaSelectionState {
    birth: BirthData,
    calculator: Arc<dyn DashaCalculator>,
    reference_jd: f64,
    /// Cached period list per level, valid under the current ancestor
    /// selections above it.
    periods: [Vec<DashaPeriod>; 5],
    selected: [Option<DashaPeriod>; 5],
}

impl DashaSelectionState {
    /// Fresh, unloaded state. Call [`load`](Self::load) before use.
    pub fn new(birth: BirthData, calculator: Arc<dyn DashaCalculator>) -> Self {
        Self {
            birth,
            calculator,
            reference_jd: birth.birth_jd,
            periods: Default::default(),
            selected: [None; 5],
        }
    }

    pub fn reference_jd(&self) -> f64 {
        self.reference_jd
    }

    /// Cached period list at a level (empty until populated by a cascade).
    pub fn level_periods(&self, level: DashaLevel) -> &[DashaPeriod] {
        &self.periods[level.index()]
    }

    /// Current selection snapshot for the presentation layer.
    pub fn selection(&self) -> DashaSelection {
        DashaSelection::new(self.selected)
    }

    /// Initial load: fetch the Maha list and auto-select the chain
    /// containing `reference_jd` all the way down to Prana.
    pub async fn load(&mut self, reference_jd: f64) -> Result<(), DashaError> {
        self.reference_jd = reference_jd;
        self.cascade(DashaLevel::Maha).await
    }

    /// User selection event: pin `index` (into the cached list) at
    /// `level`, clear all descendant selections, and re-run the cascade
    /// below it with the existing reference date.
    pub async fn select(&mut self, level: DashaLevel, index: usize) -> Result<(), DashaError> {
        if let Some(parent) = level.parent() {
            if self.selected[parent.index()].is_none() {
                return Err(DashaError::InvalidSelection(format!(
                    "cannot select at {level} level with no {parent} selection"
                )));
            }
        }
        let period = *self.periods[level.index()].get(index).ok_or_else(|| {
            DashaError::InvalidSelection(format!(
                "index {index} out of range for {level} level ({} periods)",
                self.periods[level.index()].len()
            ))
        })?;

        debug!(level = %level, lord = period.graha.name(), "user pinned period");
        self.selected[level.index()] = Some(period);
        match level.child() {
            Some(child) => self.cascade(child).await,
            None => Ok(()),
        }
    }

    /// Reference-date navigation event. Levels whose selected interval
    /// still contains the new date (and whose parent is unchanged) keep
    /// their selection, preserving user pins; the first level that no
    /// longer matches is recomputed together with everything below it.
    pub async fn navigate(&mut self, reference_jd: f64) -> Result<(), DashaError> {
        self.reference_jd = reference_jd;
        for level in ALL_LEVELS {
            let still_current = self.selected[level.index()]
                .as_ref()
                .is_some_and(|p| p.contains(reference_jd));
            if !still_current {
                return self.cascade(level).await;
            }
        }
        Ok(())
    }

    fn clear_from(&mut self, level: DashaLevel) {
        for i in level.index()..5 {
            self.selected[i] = None;
            self.periods[i].clear();
        }
    }

    /// Lords of the selected ancestors from Maha down to `through`.
    fn lords_through(&self, through: usize) -> Vec<Graha> {
        self.selected[..=through]
            .iter()
            .flatten()
            .map(|p| p.graha)
            .collect()
    }

    /// Fetch, pick, and commit every level from `start` down. On failure
    /// the failing level and its descendants are left empty and the error
    /// is returned; levels committed above are untouched.
    async fn cascade(&mut self, start: DashaLevel) -> Result<(), DashaError> {
        self.clear_from(start);
        for level in &ALL_LEVELS[start.index()..] {
            let level = *level;
            let fetched = match level.parent() {
                None => self.calculator.maha_periods(&self.birth).await,
                Some(parent) => {
                    // Cleared above, so the parent slot is always filled
                    // by the previous iteration (or a pre-existing pin).
                    let parent_period = self.selected[parent.index()]
                        .expect("cascade parent selected");
                    let lords = self.lords_through(parent.index());
                    self.calculator
                        .sub_periods(&self.birth, &parent_period, level, &lords)
                        .await
                }
            };
            let fetched = match fetched {
                Ok(f) => f,
                Err(err) => {
                    warn!(level = %level, error = %err, "period fetch failed");
                    return Err(err);
                }
            };
            let Some(picked) = pick(&fetched, self.reference_jd).copied() else {
                warn!(level = %level, "calculator returned no periods");
                return Err(DashaError::EmptyPeriods { level });
            };
            if let Some(parent) = level.parent() {
                if let Some(pp) = &self.selected[parent.index()] {
                    if !picked.nested_in(pp) {
                        warn!(level = %level, "period escapes its parent interval");
                    }
                }
            }
            debug!(
                level = %level,
                lord = picked.graha.name(),
                start_jd = picked.start_jd,
                end_jd = picked.end_jd,
                "auto-selected period"
            );
            self.periods[level.index()] = fetched;
            self.selected[level.index()] = Some(picked);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            graha: Graha::Buddh,
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Maha,
        }
    }

    #[test]
    fn pick_prefers_containment() {
        let list = [period(0.0, 10.0), period(10.0, 20.0), period(20.0, 30.0)];
        assert_eq!(pick(&list, 15.0).unwrap().start_jd, 10.0);
        assert_eq!(pick(&list, 10.0).unwrap().start_jd, 10.0);
    }

    #[test]
    fn pick_clamps_to_edges() {
        let list = [period(10.0, 20.0), period(20.0, 30.0)];
        assert_eq!(pick(&list, 5.0).unwrap().start_jd, 10.0);
        assert_eq!(pick(&list, 30.0).unwrap().start_jd, 20.0);
        assert_eq!(pick(&list, 99.0).unwrap().start_jd, 20.0);
    }

    #[test]
    fn pick_empty_is_none() {
        assert!(pick(&[], 5.0).is_none());
    }
}
