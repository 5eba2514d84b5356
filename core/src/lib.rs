//! Longevity what-if projection.
//!
//! Projects population, life expectancy, retirement age, workforce,
//! healthcare spend and centenarian counts year by year, optionally
//! perturbed by a random longevity breakthrough and one scripted black
//! swan shock.

pub mod black_swan;
pub mod black_swan_subsystem;
pub mod breakthrough_subsystem;
pub mod clock;
pub mod config;
pub mod demographics_subsystem;
pub mod engine;
pub mod error;
pub mod event;
pub mod projection;
pub mod report;
pub mod rng;
pub mod state;
pub mod subsystem;
pub mod types;

pub use config::{AdaptationRate, SimulationConfig};
pub use black_swan::BlackSwanKind;
pub use engine::{run, ProjectionEngine};
pub use error::{SimError, SimResult};
pub use event::InsightEvent;
pub use projection::{Projection, YearRecord};
