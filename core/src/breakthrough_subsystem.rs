use crate::{
    config::SimulationConfig,
    error::SimResult,
    event::InsightEvent,
    rng::RandomSource,
    state::ProjectionState,
    subsystem::ProjectionSubsystem,
    types::Year,
};

/// Rolls for the one-time longevity breakthrough.
///
/// One draw per year until it fires; after that the subsystem is inert and
/// consumes no randomness.
pub struct BreakthroughSubsystem<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> BreakthroughSubsystem<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> ProjectionSubsystem for BreakthroughSubsystem<R> {
    fn name(&self) -> &'static str { "breakthrough" }

    fn update(
        &mut self,
        year: Year,
        config: &SimulationConfig,
        state: &mut ProjectionState,
    ) -> SimResult<Vec<InsightEvent>> {
        if state.breakthrough_year.is_some() {
            return Ok(vec![]);
        }

        let roll = self.rng.next_percent();
        if roll >= config.longevity_breakthrough_probability {
            return Ok(vec![]);
        }

        let gain = config.longevity_breakthrough_impact;
        state.breakthrough_year = Some(year);
        state.life_expectancy += gain;
        state.apply_floors(year);

        log::info!(
            "year={year} longevity breakthrough: roll={roll:.3} < {:.3}, life expectancy {gain:+}",
            config.longevity_breakthrough_probability
        );

        Ok(vec![InsightEvent::LongevityBreakthrough {
            year,
            life_expectancy_gain: gain,
        }])
    }
}
