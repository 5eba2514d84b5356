//! Longevity breakthrough timing and the at-most-once rule.

use longevity_core::{
    rng::RandomSource, InsightEvent, ProjectionEngine, SimulationConfig,
};
use std::{cell::Cell, collections::VecDeque, rc::Rc};

/// Replays fixed draws and counts how many were taken.
struct ScriptedRng {
    draws: VecDeque<f64>,
    taken: Rc<Cell<usize>>,
}

impl ScriptedRng {
    fn new(draws: &[f64]) -> (Self, Rc<Cell<usize>>) {
        let taken = Rc::new(Cell::new(0));
        let rng = Self { draws: draws.iter().copied().collect(), taken: Rc::clone(&taken) };
        (rng, taken)
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        self.taken.set(self.taken.get() + 1);
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

fn config(probability: f64, years: u32) -> SimulationConfig {
    SimulationConfig {
        longevity_breakthrough_probability: probability,
        longevity_breakthrough_impact: 10.0,
        years,
        black_swan_event_year: 1_000,
        ..SimulationConfig::default()
    }
}

fn breakthrough_years(insights: &[InsightEvent]) -> Vec<u32> {
    insights
        .iter()
        .filter(|e| e.is_breakthrough())
        .map(InsightEvent::year)
        .collect()
}

#[test]
fn fires_in_first_year_whose_draw_is_below_probability() {
    let (rng, taken) = ScriptedRng::new(&[0.5, 0.4, 0.2]);
    let engine = ProjectionEngine::with_rng(config(25.0, 9), rng).unwrap();
    let projection = engine.run().unwrap();

    assert_eq!(breakthrough_years(&projection.insights), vec![2]);
    assert_eq!(projection.breakthrough_year(), Some(2));
    assert_eq!(projection.records[1].life_expectancy, 80);
    assert_eq!(projection.records[2].life_expectancy, 90);
    assert_eq!(projection.records[9].life_expectancy, 90);
    // No further draws once it has fired.
    assert_eq!(taken.get(), 3);
}

#[test]
fn breakthrough_year_gets_a_summary() {
    let (rng, _) = ScriptedRng::new(&[0.9, 0.9, 0.9, 0.0]);
    let projection = ProjectionEngine::with_rng(config(50.0, 5), rng)
        .unwrap()
        .run()
        .unwrap();

    let kinds: Vec<&str> = projection.insights_for_year(3).map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["longevity_breakthrough", "year_summary"]);
}

#[test]
fn certain_breakthrough_fires_once_at_year_zero() {
    let projection = longevity_core::run(config(100.0, 60), 99).unwrap();

    assert_eq!(breakthrough_years(&projection.insights), vec![0]);
    assert!(projection.records.iter().all(|r| r.life_expectancy == 90));
}

#[test]
fn zero_probability_never_fires() {
    for seed in 0..20 {
        let projection = longevity_core::run(config(0.0, 200), seed).unwrap();
        assert!(breakthrough_years(&projection.insights).is_empty(), "seed {seed}");
    }
}

#[test]
fn fires_at_most_once_per_run() {
    for seed in 0..50 {
        let projection = longevity_core::run(config(30.0, 100), seed).unwrap();
        assert!(breakthrough_years(&projection.insights).len() <= 1, "seed {seed}");

        let jumps = projection
            .records
            .windows(2)
            .filter(|w| w[1].life_expectancy != w[0].life_expectancy)
            .count();
        assert!(jumps <= 1, "seed {seed}: {jumps} life expectancy jumps");
    }
}

#[test]
fn breakthrough_lifts_retirement_age_through_adaptation() {
    let (rng, _) = ScriptedRng::new(&[0.0]);
    let projection = ProjectionEngine::with_rng(config(1.0, 0), rng)
        .unwrap()
        .run()
        .unwrap();

    // 65 + (90 - 80) * 0.5 = 70, under the 80 cap.
    assert_eq!(projection.records[0].retirement_age, 70);
    // Population growth scales with 90 / 80.
    assert_eq!(projection.records[0].population, 1_011_250);
}
