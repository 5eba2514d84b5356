//! Two engines, same seed, same config: identical projections.

use longevity_core::{engine, ProjectionEngine, SimError, SimulationConfig};

fn noisy_config() -> SimulationConfig {
    let _ = env_logger::builder().is_test(true).try_init();
    SimulationConfig {
        longevity_breakthrough_probability: 5.0,
        years: 100,
        ..SimulationConfig::default()
    }
}

#[test]
fn same_seed_produces_identical_projections() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;

    let a = engine::run(noisy_config(), SEED).expect("run a");
    let b = engine::run(noisy_config(), SEED).expect("run b");

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn different_seeds_produce_different_breakthrough_years() {
    let config = SimulationConfig {
        longevity_breakthrough_probability: 10.0,
        ..noisy_config()
    };

    let mut years: Vec<Option<u32>> = (0..20)
        .map(|seed| engine::run(config.clone(), seed).unwrap().breakthrough_year())
        .collect();
    years.sort();
    years.dedup();

    assert!(years.len() > 1, "every seed broke through in the same year: seed is not being used");
}

#[test]
fn stepping_then_running_matches_single_run() {
    const SEED: u64 = 77;

    let whole = engine::run(noisy_config(), SEED).unwrap();

    let mut stepped = ProjectionEngine::build(noisy_config(), SEED).unwrap();
    for expected_year in 0..25 {
        let record = stepped.step().unwrap();
        assert_eq!(record.year, expected_year);
    }
    assert_eq!(stepped.records().len(), 25);
    let finished = stepped.run().unwrap();

    assert_eq!(whole, finished);
}

#[test]
fn stepping_past_horizon_is_an_error() {
    let config = SimulationConfig { years: 2, ..noisy_config() };
    let mut engine = ProjectionEngine::build(config, 1).unwrap();

    for _ in 0..3 {
        engine.step().unwrap();
    }
    assert!(engine.is_finished());
    assert!(matches!(engine.step(), Err(SimError::HorizonExhausted { years: 2 })));
    assert_eq!(engine.records().len(), 3);
}

#[test]
fn projection_carries_its_seed() {
    let projection = engine::run(noisy_config(), 314).unwrap();
    assert_eq!(projection.seed, Some(314));
}

#[test]
fn interleaved_stepping_keeps_years_sequential_and_bounded() {
    let config = SimulationConfig { years: 6, ..noisy_config() };
    let mut engine = ProjectionEngine::build(config, 5).unwrap();

    engine.step().unwrap();
    engine.step().unwrap();
    let projection = engine.run().unwrap();

    assert_eq!(projection.records.len(), 7);
    for (i, record) in projection.records.iter().enumerate() {
        assert_eq!(record.year as usize, i);
    }
}
