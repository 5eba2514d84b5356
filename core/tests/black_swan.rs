//! Scripted black swan shocks.

use longevity_core::{
    black_swan::BlackSwanKind, engine, report, InsightEvent, SimulationConfig,
};

fn scenario(kind: BlackSwanKind, at: u32, years: u32) -> SimulationConfig {
    SimulationConfig {
        longevity_breakthrough_probability: 0.0,
        years,
        black_swan_event_type: kind,
        black_swan_event_year: at,
        ..SimulationConfig::default()
    }
}

fn black_swan_years(insights: &[InsightEvent]) -> Vec<u32> {
    insights
        .iter()
        .filter(|e| matches!(e, InsightEvent::BlackSwan { .. }))
        .map(InsightEvent::year)
        .collect()
}

#[test]
fn pandemic_in_year_zero_compounds_with_growth() {
    let projection = engine::run(scenario(BlackSwanKind::Pandemic, 0, 1), 42).unwrap();
    let r0 = &projection.records[0];

    // 1_000_000 * 0.98 * (1 + 0.01 * 78 / 80)
    assert_eq!(r0.population, 989_555);
    assert_eq!(r0.life_expectancy, 78);
    assert_eq!(r0.retirement_age, 64);
    assert!((r0.economic_growth_rate - 1.8).abs() < 1e-12);

    // The shock is permanent, not re-applied.
    let r1 = &projection.records[1];
    assert_eq!(r1.life_expectancy, 78);
    assert!((r1.economic_growth_rate - 1.8).abs() < 1e-12);
}

#[test]
fn shock_applies_exactly_at_configured_year() {
    let baseline = engine::run(scenario(BlackSwanKind::None, 5, 12), 9).unwrap();
    let shocked = engine::run(scenario(BlackSwanKind::WorldWar, 5, 12), 9).unwrap();

    assert_eq!(black_swan_years(&shocked.insights), vec![5]);
    assert_eq!(&baseline.records[..5], &shocked.records[..5]);
    assert_eq!(shocked.records[4].life_expectancy, 80);
    assert_eq!(shocked.records[5].life_expectancy, 75);
    assert!(shocked.records[5].population < baseline.records[5].population);
}

#[test]
fn none_type_never_alters_the_run() {
    let config = scenario(BlackSwanKind::None, 3, 20);
    let projection = engine::run(config, 1).unwrap();

    assert!(black_swan_years(&projection.insights).is_empty());
    assert!(projection.records.iter().all(|r| r.life_expectancy == 80));
    assert!(projection.records.iter().all(|r| r.economic_growth_rate == 2.0));
}

#[test]
fn configured_year_gets_a_summary_even_for_none() {
    let projection = engine::run(scenario(BlackSwanKind::None, 3, 20), 1).unwrap();

    let kinds: Vec<&str> = projection.insights_for_year(3).map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["year_summary"]);
}

#[test]
fn shock_beyond_horizon_never_fires() {
    let projection = engine::run(scenario(BlackSwanKind::ClimateDisaster, 50, 10), 1).unwrap();

    assert!(black_swan_years(&projection.insights).is_empty());
    assert!(projection.records.iter().all(|r| r.life_expectancy == 80));
}

#[test]
fn every_catalog_entry_moves_life_expectancy_by_its_impact() {
    for kind in BlackSwanKind::ALL {
        let projection = engine::run(scenario(kind, 0, 0), 0).unwrap();
        let expected = 80.0 + kind.event().life_expectancy_impact;
        assert_eq!(projection.records[0].life_expectancy, expected as i64, "{kind}");
    }
}

#[test]
fn black_swan_insight_precedes_summary() {
    let projection = engine::run(scenario(BlackSwanKind::EconomicCollapse, 4, 8), 0).unwrap();

    let kinds: Vec<&str> = projection.insights_for_year(4).map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["black_swan", "year_summary"]);
}

#[test]
fn pandemic_narrative_reports_percent_decreases() {
    let projection = engine::run(scenario(BlackSwanKind::Pandemic, 0, 0), 0).unwrap();

    assert_eq!(
        report::render_insight(&projection.insights[0]),
        "Year 0: Global Pandemic occurred. Population impact: 2.00% decrease. \
         Life expectancy impact: -2 years. Economic impact: 10.00% decrease in growth rate."
    );
}

#[test]
fn singularity_reports_growth_as_negative_decrease() {
    let projection = engine::run(scenario(BlackSwanKind::AiSingularity, 0, 0), 0).unwrap();

    match &projection.insights[0] {
        InsightEvent::BlackSwan { population_decrease_pct, economic_decrease_pct, .. } => {
            assert_eq!(*population_decrease_pct, 0.0);
            assert!((*economic_decrease_pct - -50.0).abs() < 1e-9);
        }
        other => panic!("expected black swan insight, got {other:?}"),
    }
    let text = report::render_insight(&projection.insights[0]);
    assert!(text.contains("Economic impact: -50.00% decrease in growth rate."), "{text}");
    assert!(text.contains("Life expectancy impact: 10 years."), "{text}");
}
