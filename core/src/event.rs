//! Structured insight events.
//!
//! RULE: The engine never formats narrative text. Every notable thing that
//! happens in a year is recorded as an `InsightEvent`; turning events into
//! prose is the job of `report`.

use crate::{black_swan::BlackSwanKind, projection::YearRecord, types::Year};
use serde::{Deserialize, Serialize};

/// Every insight emitted during a projection run, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightEvent {
    LongevityBreakthrough {
        year: Year,
        /// Years added to life expectancy.
        life_expectancy_gain: f64,
    },

    BlackSwan {
        year: Year,
        event_type: BlackSwanKind,
        /// `(1 - populationImpact) * 100`.
        population_decrease_pct: f64,
        life_expectancy_impact: f64,
        /// `(1 - economicImpact) * 100`.
        economic_decrease_pct: f64,
    },

    YearSummary {
        year: Year,
        record: YearRecord,
    },
}

impl InsightEvent {
    pub fn year(&self) -> Year {
        match self {
            Self::LongevityBreakthrough { year, .. }
            | Self::BlackSwan { year, .. }
            | Self::YearSummary { year, .. } => *year,
        }
    }

    /// Stable name for the variant, matching the serialized `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::LongevityBreakthrough { .. } => "longevity_breakthrough",
            Self::BlackSwan { .. }             => "black_swan",
            Self::YearSummary { .. }           => "year_summary",
        }
    }

    pub fn is_breakthrough(&self) -> bool {
        matches!(self, Self::LongevityBreakthrough { .. })
    }
}
