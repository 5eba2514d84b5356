use crate::{
    config::SimulationConfig,
    error::SimResult,
    event::InsightEvent,
    state::ProjectionState,
    subsystem::ProjectionSubsystem,
    types::Year,
};

/// Applies the scripted black swan shock in its configured year.
#[derive(Default)]
pub struct BlackSwanSubsystem;

impl BlackSwanSubsystem {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectionSubsystem for BlackSwanSubsystem {
    fn name(&self) -> &'static str { "black_swan" }

    fn update(
        &mut self,
        year: Year,
        config: &SimulationConfig,
        state: &mut ProjectionState,
    ) -> SimResult<Vec<InsightEvent>> {
        if !config.black_swan_fires_in(year) {
            return Ok(vec![]);
        }

        let kind = config.black_swan_event_type;
        let event = kind.event();

        state.population *= event.population_impact;
        state.life_expectancy += event.life_expectancy_impact;
        state.economic_growth_rate *= event.economic_impact;
        state.apply_floors(year);

        log::info!(
            "year={year} black swan '{}': population x{}, life expectancy {:+}, growth x{}",
            event.name,
            event.population_impact,
            event.life_expectancy_impact,
            event.economic_impact
        );

        Ok(vec![InsightEvent::BlackSwan {
            year,
            event_type: kind,
            population_decrease_pct: event.population_decrease_pct(),
            life_expectancy_impact: event.life_expectancy_impact,
            economic_decrease_pct: event.economic_decrease_pct(),
        }])
    }
}
