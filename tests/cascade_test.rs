//! End-to-end tests for the dasha selection cascade against a
//! deterministic proportional calculator.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use kundali_interp::dasha::{
    ALL_LEVELS, BirthData, DashaCalculator, DashaError, DashaLevel, DashaPeriod,
    DashaSelectionState,
};
use kundali_interp::graha::Graha;

const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

const BIRTH: BirthData = BirthData {
    birth_jd: 0.0,
    moon_longitude: 0.0,
};

/// Splits every parent interval into 9 equal sub-periods, lord cycle
/// starting at the parent's lord. Counts fetches per level so tests can
/// assert exactly which levels were recomputed.
struct ProportionalCalculator {
    fetches: [AtomicUsize; 5],
}

impl ProportionalCalculator {
    fn new() -> Self {
        Self {
            fetches: Default::default(),
        }
    }

    fn fetch_count(&self, level: DashaLevel) -> usize {
        self.fetches[level.index()].load(Ordering::SeqCst)
    }

    fn reset_counts(&self) {
        for f in &self.fetches {
            f.store(0, Ordering::SeqCst);
        }
    }

    fn split(start: f64, end: f64, level: DashaLevel, first_lord: usize) -> Vec<DashaPeriod> {
        let span = (end - start) / 9.0;
        (0..9)
            .map(|i| DashaPeriod {
                graha: LORD_CYCLE[(first_lord + i) % 9],
                start_jd: start + i as f64 * span,
                end_jd: start + (i + 1) as f64 * span,
                level,
            })
            .collect()
    }
}

#[async_trait]
impl DashaCalculator for ProportionalCalculator {
    async fn maha_periods(&self, _birth: &BirthData) -> Result<Vec<DashaPeriod>, DashaError> {
        self.fetches[0].fetch_add(1, Ordering::SeqCst);
        Ok(Self::split(0.0, 900.0, DashaLevel::Maha, 0))
    }

    async fn sub_periods(
        &self,
        _birth: &BirthData,
        parent: &DashaPeriod,
        level: DashaLevel,
        _ancestor_lords: &[Graha],
    ) -> Result<Vec<DashaPeriod>, DashaError> {
        self.fetches[level.index()].fetch_add(1, Ordering::SeqCst);
        let first = LORD_CYCLE
            .iter()
            .position(|g| *g == parent.graha)
            .expect("parent lord in cycle");
        Ok(Self::split(parent.start_jd, parent.end_jd, level, first))
    }
}

/// Delegates to the proportional calculator but fails at one level.
struct FailingAt {
    inner: ProportionalCalculator,
    fail_level: DashaLevel,
}

#[async_trait]
impl DashaCalculator for FailingAt {
    async fn maha_periods(&self, birth: &BirthData) -> Result<Vec<DashaPeriod>, DashaError> {
        if self.fail_level == DashaLevel::Maha {
            return Err(DashaError::Calculator {
                level: DashaLevel::Maha,
                message: "service unavailable".into(),
            });
        }
        self.inner.maha_periods(birth).await
    }

    async fn sub_periods(
        &self,
        birth: &BirthData,
        parent: &DashaPeriod,
        level: DashaLevel,
        ancestor_lords: &[Graha],
    ) -> Result<Vec<DashaPeriod>, DashaError> {
        if level == self.fail_level {
            return Err(DashaError::Calculator {
                level,
                message: "service unavailable".into(),
            });
        }
        self.inner
            .sub_periods(birth, parent, level, ancestor_lords)
            .await
    }
}

async fn loaded_state(reference_jd: f64) -> (Arc<ProportionalCalculator>, DashaSelectionState) {
    let calc = Arc::new(ProportionalCalculator::new());
    let mut state = DashaSelectionState::new(BIRTH, calc.clone());
    state.load(reference_jd).await.expect("initial load");
    (calc, state)
}

#[tokio::test]
async fn load_selects_a_full_consistent_chain() {
    let (calc, state) = loaded_state(450.0).await;
    let sel = state.selection();
    assert_eq!(sel.depth(), 5);
    assert!(sel.is_consistent());
    for level in ALL_LEVELS {
        let p = sel.at(level).expect("level selected");
        assert!(p.contains(450.0), "{level} does not contain the date");
        assert_eq!(p.level, level);
        assert_eq!(calc.fetch_count(level), 1);
    }
}

#[tokio::test]
async fn selecting_a_new_maha_repopulates_all_descendants() {
    let (_calc, mut state) = loaded_state(450.0).await;
    let before = state.selection();

    // Pin the first Maha period [0, 100), far from the reference date
    state.select(DashaLevel::Maha, 0).await.expect("select");
    let sel = state.selection();
    let maha = sel.at(DashaLevel::Maha).unwrap();
    assert_eq!(maha.start_jd, 0.0);
    assert_ne!(sel.at(DashaLevel::Maha), before.at(DashaLevel::Maha));

    // Every descendant was cleared and re-selected under the new pin
    assert_eq!(sel.depth(), 5);
    assert!(sel.is_consistent());
    for level in [
        DashaLevel::Antar,
        DashaLevel::Pratyantar,
        DashaLevel::Sookshma,
        DashaLevel::Prana,
    ] {
        let p = sel.at(level).unwrap();
        assert!(p.start_jd >= 0.0 && p.end_jd <= 100.0, "{level} outside pin");
    }
    assert_eq!(state.reference_jd(), 450.0);
}

#[tokio::test]
async fn pinned_ancestor_excluding_the_date_clamps_children_to_its_edge() {
    let (_calc, mut state) = loaded_state(450.0).await;
    state.select(DashaLevel::Maha, 0).await.expect("select");

    // Reference 450 lies past the pinned [0, 100) interval, so each level
    // settles on its final sub-period
    let sel = state.selection();
    let antar = sel.at(DashaLevel::Antar).unwrap();
    assert!((antar.end_jd - 100.0).abs() < 1e-9);
    let prana = sel.at(DashaLevel::Prana).unwrap();
    assert!((prana.end_jd - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn navigating_within_sookshma_recomputes_only_prana() {
    let (calc, mut state) = loaded_state(450.0).await;
    let before = state.selection();
    let sookshma = *before.at(DashaLevel::Sookshma).unwrap();
    let prana = *before.at(DashaLevel::Prana).unwrap();

    // A date still inside the Sookshma interval but outside the Prana one
    let new_jd = if prana.end_jd < sookshma.end_jd {
        (prana.end_jd + sookshma.end_jd) / 2.0
    } else {
        (sookshma.start_jd + prana.start_jd) / 2.0
    };
    assert!(sookshma.contains(new_jd) && !prana.contains(new_jd));

    calc.reset_counts();
    state.navigate(new_jd).await.expect("navigate");

    let after = state.selection();
    for level in [
        DashaLevel::Maha,
        DashaLevel::Antar,
        DashaLevel::Pratyantar,
        DashaLevel::Sookshma,
    ] {
        assert_eq!(after.at(level), before.at(level), "{level} was disturbed");
        assert_eq!(calc.fetch_count(level), 0, "{level} was refetched");
    }
    assert_eq!(calc.fetch_count(DashaLevel::Prana), 1);
    assert!(after.at(DashaLevel::Prana).unwrap().contains(new_jd));
    assert!(after.is_consistent());
}

#[tokio::test]
async fn navigating_to_the_same_date_touches_nothing() {
    let (calc, mut state) = loaded_state(450.0).await;
    calc.reset_counts();
    state.navigate(450.0).await.expect("navigate");
    for level in ALL_LEVELS {
        assert_eq!(calc.fetch_count(level), 0);
    }
}

#[tokio::test]
async fn navigating_across_a_maha_boundary_recomputes_everything() {
    let (calc, mut state) = loaded_state(450.0).await;
    calc.reset_counts();
    state.navigate(750.0).await.expect("navigate");
    let sel = state.selection();
    assert_eq!(sel.depth(), 5);
    assert!(sel.is_consistent());
    for level in ALL_LEVELS {
        assert!(sel.at(level).unwrap().contains(750.0));
        assert_eq!(calc.fetch_count(level), 1);
    }
}

#[tokio::test]
async fn calculator_failure_leaves_ancestors_intact() {
    let calc = FailingAt {
        inner: ProportionalCalculator::new(),
        fail_level: DashaLevel::Pratyantar,
    };
    let mut state = DashaSelectionState::new(BIRTH, Arc::new(calc));
    let err = state.load(450.0).await.expect_err("load should fail");
    assert!(matches!(
        err,
        DashaError::Calculator {
            level: DashaLevel::Pratyantar,
            ..
        }
    ));

    let sel = state.selection();
    assert_eq!(sel.depth(), 2);
    assert!(sel.is_consistent());
    assert!(sel.at(DashaLevel::Maha).is_some());
    assert!(sel.at(DashaLevel::Antar).is_some());
    assert!(sel.at(DashaLevel::Pratyantar).is_none());
    assert!(sel.at(DashaLevel::Prana).is_none());
}

#[tokio::test]
async fn selection_before_load_is_rejected() {
    let mut state = DashaSelectionState::new(BIRTH, Arc::new(ProportionalCalculator::new()));
    let err = state
        .select(DashaLevel::Antar, 0)
        .await
        .expect_err("no ancestors selected");
    assert!(matches!(err, DashaError::InvalidSelection(_)));
}

#[tokio::test]
async fn out_of_range_index_is_rejected_without_disturbing_state() {
    let (_calc, mut state) = loaded_state(450.0).await;
    let before = state.selection();
    let err = state
        .select(DashaLevel::Maha, 99)
        .await
        .expect_err("bad index");
    assert!(matches!(err, DashaError::InvalidSelection(_)));
    assert_eq!(state.selection(), before);
}

#[tokio::test]
async fn deeper_pin_survives_navigation_inside_its_interval() {
    let (_calc, mut state) = loaded_state(450.0).await;

    // Pin a different Antar under the current Maha
    let antar_periods: Vec<DashaPeriod> = state.level_periods(DashaLevel::Antar).to_vec();
    let current = *state.selection().at(DashaLevel::Antar).unwrap();
    let (idx, pinned) = antar_periods
        .iter()
        .enumerate()
        .find(|(_, p)| p.start_jd != current.start_jd)
        .map(|(i, p)| (i, *p))
        .expect("alternative antar period");
    state.select(DashaLevel::Antar, idx).await.expect("pin");

    // Navigate to a date inside the pinned interval: the pin holds
    let inside = (pinned.start_jd + pinned.end_jd) / 2.0;
    state.navigate(inside).await.expect("navigate");
    let sel = state.selection();
    assert_eq!(sel.at(DashaLevel::Antar), Some(&pinned));
    assert_eq!(sel.depth(), 5);
    assert!(sel.is_consistent());
}
