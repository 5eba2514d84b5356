//! The deterministic part of the yearly update: retirement age,
//! participation, population growth, workforce, healthcare spend and the
//! fixed-ratio centenarian counts.

use crate::{
    config::SimulationConfig,
    error::SimResult,
    event::InsightEvent,
    state::{
        ProjectionState, BASE_PARTICIPATION_RATE, CENTENARIAN_CANCER_RATIO, CENTENARIAN_RATIO,
        SUPERCENTENARIAN_RATIO,
    },
    subsystem::ProjectionSubsystem,
    types::Year,
};

/// Retirement age may never come closer than this to life expectancy.
pub const RETIREMENT_BUFFER_YEARS: f64 = 10.0;
/// Share of each extra year of life expectancy passed on to retirement age.
pub const RETIREMENT_PASS_THROUGH: f64 = 0.5;
/// Participation gain per year of later retirement.
pub const PARTICIPATION_PER_YEAR: f64 = 0.01;
/// Baseline annual population growth before scaling.
pub const BASE_POPULATION_GROWTH: f64 = 0.01;

#[derive(Default)]
pub struct DemographicsSubsystem;

impl DemographicsSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectionSubsystem for DemographicsSubsystem {
    fn name(&self) -> &'static str { "demographics" }

    fn update(
        &mut self,
        year: Year,
        config: &SimulationConfig,
        state: &mut ProjectionState,
    ) -> SimResult<Vec<InsightEvent>> {
        let factors = config.adaptation_factors();
        let longevity_ratio = state.life_expectancy / config.life_expectancy;

        let retirement_increase = (state.life_expectancy - config.life_expectancy)
            * RETIREMENT_PASS_THROUGH
            * factors.societal
            * factors.legal;
        state.retirement_age = (config.retirement_age + retirement_increase)
            .min(state.life_expectancy - RETIREMENT_BUFFER_YEARS);

        let participation_rate = BASE_PARTICIPATION_RATE
            + (state.retirement_age - config.retirement_age)
                * PARTICIPATION_PER_YEAR
                * factors.workforce
                * factors.infrastructure;

        let growth_rate = BASE_POPULATION_GROWTH * factors.societal * longevity_ratio;
        state.population *= 1.0 + growth_rate;

        state.workforce = state.population * participation_rate;

        let baseline_workforce = config.population * BASE_PARTICIPATION_RATE;
        let economic_impact = 1.0
            + (state.economic_growth_rate / 100.0)
                * longevity_ratio
                * (state.workforce / baseline_workforce);
        state.healthcare_expenditure *= economic_impact;

        state.centenarians = state.population * CENTENARIAN_RATIO;
        state.supercentenarians = state.population * SUPERCENTENARIAN_RATIO;
        state.cancer_incidence_in_centenarians = state.centenarians * CENTENARIAN_CANCER_RATIO;

        log::debug!(
            "year={year} demographics: pop={:.0} le={:.2} ret={:.2} part={:.4} spend={:.0}",
            state.population,
            state.life_expectancy,
            state.retirement_age,
            participation_rate,
            state.healthcare_expenditure
        );

        Ok(vec![])
    }
}
