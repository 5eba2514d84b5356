//! Subsystem trait.
//!
//! RULE: Every stage of the yearly update implements ProjectionSubsystem.
//! The engine calls update() on each registered subsystem in registration
//! order, once per year. Execution order is fixed and documented in
//! engine.rs.

use crate::{
    config::SimulationConfig,
    error::SimResult,
    event::InsightEvent,
    state::ProjectionState,
    types::Year,
};

/// The contract every subsystem must fulfill.
pub trait ProjectionSubsystem {
    /// Unique stable name for this subsystem.
    fn name(&self) -> &'static str;

    /// Called once per year by the engine.
    ///
    /// - `year`:      the year being simulated
    /// - `config`:    the baseline inputs for the run
    /// - `state`:     the running state, already updated by earlier subsystems
    ///
    /// Returns the new insights to append to this year's log.
    fn update(
        &mut self,
        year: Year,
        config: &SimulationConfig,
        state: &mut ProjectionState,
    ) -> SimResult<Vec<InsightEvent>>;
}
