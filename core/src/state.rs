//! Mutable per-run state. Built once from the config, mutated in place
//! once per year, dropped with the engine.

use crate::{config::SimulationConfig, projection::YearRecord, types::Year};

/// Share of the population assumed to be working before any adjustment.
pub const BASE_PARTICIPATION_RATE: f64 = 0.6;
/// Centenarians per head of population.
pub const CENTENARIAN_RATIO: f64 = 0.007;
/// Supercentenarians per head of population.
pub const SUPERCENTENARIAN_RATIO: f64 = 0.000_01;
/// Cancer incidence among centenarians.
pub const CENTENARIAN_CANCER_RATIO: f64 = 0.163;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    pub population:             f64,
    pub life_expectancy:        f64,
    pub retirement_age:         f64,
    pub healthcare_expenditure: f64,
    pub workforce:              f64,
    /// Percent.
    pub economic_growth_rate:   f64,
    pub centenarians:           f64,
    pub supercentenarians:      f64,
    pub cancer_incidence_in_centenarians: f64,
    /// Set once, the year the breakthrough fires. Never reset.
    pub breakthrough_year:      Option<Year>,
}

impl ProjectionState {
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            population:             config.population,
            life_expectancy:        config.life_expectancy,
            retirement_age:         config.retirement_age,
            healthcare_expenditure: config.healthcare_expenditure_per_capita * config.population,
            workforce:              config.population * BASE_PARTICIPATION_RATE,
            economic_growth_rate:   config.economic_growth_rate,
            centenarians:           0.0,
            supercentenarians:      0.0,
            cancer_incidence_in_centenarians: 0.0,
            breakthrough_year:      None,
        }
    }

    /// Floor population and life expectancy at zero after a shock.
    pub fn apply_floors(&mut self, year: Year) {
        if self.population < 0.0 {
            log::warn!("year={year} population fell to {:.2}, clamping to 0", self.population);
            self.population = 0.0;
        }
        if self.life_expectancy < 0.0 {
            log::warn!(
                "year={year} life expectancy fell to {:.2}, clamping to 0",
                self.life_expectancy
            );
            self.life_expectancy = 0.0;
        }
    }

    pub fn to_record(&self, year: Year) -> YearRecord {
        YearRecord {
            year,
            population:             round(self.population),
            life_expectancy:        round(self.life_expectancy),
            retirement_age:         round(self.retirement_age),
            healthcare_expenditure: round(self.healthcare_expenditure),
            workforce:              round(self.workforce),
            economic_growth_rate:   self.economic_growth_rate,
            centenarians:           round(self.centenarians),
            supercentenarians:      round(self.supercentenarians),
            cancer_incidence_in_centenarians: round(self.cancer_incidence_in_centenarians),
        }
    }
}

/// Round half away from zero. Saturates at the i64 bounds.
fn round(value: f64) -> i64 {
    value.round() as i64
}
