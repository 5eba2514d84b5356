//! The projection engine.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Breakthrough subsystem   (the only random draw)
//!   2. Black swan subsystem
//!   3. Demographics subsystem   (retirement, workforce, population, spend)
//!   4. Record emission          (engine)
//!   5. Year summary insight     (engine)
//!
//! RULES:
//!   - Subsystems execute in registration order, every year.
//!   - Each year reads the state left by the previous year.
//!   - All randomness flows through the injected RandomSource.
//!   - Every notable change is recorded as an InsightEvent.

use crate::{
    black_swan_subsystem::BlackSwanSubsystem,
    breakthrough_subsystem::BreakthroughSubsystem,
    clock::ProjectionClock,
    config::SimulationConfig,
    demographics_subsystem::DemographicsSubsystem,
    error::{SimError, SimResult},
    event::InsightEvent,
    projection::{Projection, YearRecord},
    rng::{RandomSource, RngBank, StreamSlot},
    state::ProjectionState,
    subsystem::ProjectionSubsystem,
    types::Year,
};

/// A year-divisible-by-this always gets a summary insight.
pub const SUMMARY_INTERVAL: Year = 10;

pub struct ProjectionEngine {
    clock:      ProjectionClock,
    config:     SimulationConfig,
    seed:       Option<u64>,
    state:      ProjectionState,
    subsystems: Vec<Box<dyn ProjectionSubsystem>>,
    records:    Vec<YearRecord>,
    insights:   Vec<InsightEvent>,
}

impl ProjectionEngine {
    /// Build a fully wired engine whose breakthrough draws come from the
    /// given master seed.
    pub fn build(config: SimulationConfig, seed: u64) -> SimResult<Self> {
        let rng = RngBank::new(seed).for_slot(StreamSlot::Breakthrough);
        let mut engine = Self::with_rng(config, rng)?;
        engine.seed = Some(seed);
        Ok(engine)
    }

    /// Build a fully wired engine drawing from a caller-supplied source.
    pub fn with_rng<R>(config: SimulationConfig, rng: R) -> SimResult<Self>
    where
        R: RandomSource + 'static,
    {
        config.validate()?;

        let mut engine = Self {
            clock:      ProjectionClock::new(config.years),
            state:      ProjectionState::initial(&config),
            seed:       None,
            subsystems: Vec::new(),
            records:    Vec::new(),
            insights:   Vec::new(),
            config,
        };

        // EXECUTION ORDER: fixed, documented, never reordered.
        engine.register(Box::new(BreakthroughSubsystem::new(rng)));
        engine.register(Box::new(BlackSwanSubsystem::new()));
        engine.register(Box::new(DemographicsSubsystem::new()));
        Ok(engine)
    }

    fn register(&mut self, subsystem: Box<dyn ProjectionSubsystem>) {
        self.subsystems.push(subsystem);
    }

    /// Simulate the next year. This is the core projection step.
    pub fn step(&mut self) -> SimResult<YearRecord> {
        let year = self
            .clock
            .advance()
            .ok_or(SimError::HorizonExhausted { years: self.config.years })?;

        let mut year_events: Vec<InsightEvent> = Vec::new();
        for subsystem in &mut self.subsystems {
            let new_events = subsystem.update(year, &self.config, &mut self.state)?;
            if !new_events.is_empty() {
                log::trace!("year={year} {} emitted {} insight(s)", subsystem.name(), new_events.len());
            }
            year_events.extend(new_events);
        }

        let record = self.state.to_record(year);

        if self.wants_summary(year, &year_events) {
            year_events.push(InsightEvent::YearSummary { year, record: record.clone() });
        }

        self.records.push(record.clone());
        self.insights.extend(year_events);
        Ok(record)
    }

    /// Run every remaining year and hand back the projection.
    pub fn run(mut self) -> SimResult<Projection> {
        log::debug!(
            "projection start: seed={:?} years=0..={} black_swan={}@{}",
            self.seed,
            self.config.years,
            self.config.black_swan_event_type,
            self.config.black_swan_event_year
        );
        while !self.clock.is_finished() {
            self.step()?;
        }
        log::debug!(
            "projection done: {} records, {} insights, breakthrough={:?}",
            self.records.len(),
            self.insights.len(),
            self.state.breakthrough_year
        );
        Ok(self.into_projection())
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    /// Consume the engine, keeping whatever has been simulated so far.
    pub fn into_projection(self) -> Projection {
        Projection {
            seed:     self.seed,
            records:  self.records,
            insights: self.insights,
        }
    }

    /// Summaries land on every tenth year, on the breakthrough year and on
    /// the configured black swan year (even when the type is `none`).
    fn wants_summary(&self, year: Year, year_events: &[InsightEvent]) -> bool {
        year % SUMMARY_INTERVAL == 0
            || year_events.iter().any(InsightEvent::is_breakthrough)
            || year == self.config.black_swan_event_year
    }
}

/// Run a full projection from a config and master seed.
pub fn run(config: SimulationConfig, seed: u64) -> SimResult<Projection> {
    ProjectionEngine::build(config, seed)?.run()
}
