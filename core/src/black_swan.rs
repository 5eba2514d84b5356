//! Black swan catalog: scripted shocks keyed by event type.
//!
//! The catalog is a fixed lookup from `BlackSwanKind` to a `const` effect
//! tuple. There is no mutable global state; `BlackSwanKind::event()` is the
//! only way in.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Effect of one black swan event on the running state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackSwanEvent {
    pub name: &'static str,
    /// Multiplies the current population.
    pub population_impact: f64,
    /// Added to the current life expectancy, in years.
    pub life_expectancy_impact: f64,
    /// Multiplies the current economic growth rate.
    pub economic_impact: f64,
}

impl BlackSwanEvent {
    /// Reported population change, as `(1 - factor) * 100`.
    /// Negative for factors above 1.
    pub fn population_decrease_pct(&self) -> f64 {
        percent_decrease(self.population_impact)
    }

    /// Reported growth-rate change, as `(1 - factor) * 100`.
    /// Negative for factors above 1.
    pub fn economic_decrease_pct(&self) -> f64 {
        percent_decrease(self.economic_impact)
    }
}

pub fn percent_decrease(factor: f64) -> f64 {
    (1.0 - factor) * 100.0
}

const NONE: BlackSwanEvent = BlackSwanEvent {
    name: "None",
    population_impact: 1.0,
    life_expectancy_impact: 0.0,
    economic_impact: 1.0,
};

const PANDEMIC: BlackSwanEvent = BlackSwanEvent {
    name: "Global Pandemic",
    population_impact: 0.98,
    life_expectancy_impact: -2.0,
    economic_impact: 0.9,
};

const WORLD_WAR: BlackSwanEvent = BlackSwanEvent {
    name: "World War",
    population_impact: 0.95,
    life_expectancy_impact: -5.0,
    economic_impact: 0.7,
};

const ECONOMIC_COLLAPSE: BlackSwanEvent = BlackSwanEvent {
    name: "Global Economic Collapse",
    population_impact: 0.99,
    life_expectancy_impact: -3.0,
    economic_impact: 0.6,
};

const AI_SINGULARITY: BlackSwanEvent = BlackSwanEvent {
    name: "AI Singularity",
    population_impact: 1.0,
    life_expectancy_impact: 10.0,
    economic_impact: 1.5,
};

const CLIMATE_DISASTER: BlackSwanEvent = BlackSwanEvent {
    name: "Climate Disaster",
    population_impact: 0.97,
    life_expectancy_impact: -4.0,
    economic_impact: 0.8,
};

/// Which scripted shock, if any, fires during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlackSwanKind {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "pandemic")]
    Pandemic,
    #[serde(rename = "worldWar")]
    WorldWar,
    #[serde(rename = "economicCollapse")]
    EconomicCollapse,
    #[serde(rename = "ai_singularity")]
    AiSingularity,
    #[serde(rename = "climate_disaster")]
    ClimateDisaster,
}

impl BlackSwanKind {
    pub const ALL: [BlackSwanKind; 6] = [
        Self::None,
        Self::Pandemic,
        Self::WorldWar,
        Self::EconomicCollapse,
        Self::AiSingularity,
        Self::ClimateDisaster,
    ];

    /// Catalog entry for this kind. `None` maps to the identity effect.
    pub fn event(&self) -> &'static BlackSwanEvent {
        match self {
            Self::None             => &NONE,
            Self::Pandemic         => &PANDEMIC,
            Self::WorldWar         => &WORLD_WAR,
            Self::EconomicCollapse => &ECONOMIC_COLLAPSE,
            Self::AiSingularity    => &AI_SINGULARITY,
            Self::ClimateDisaster  => &CLIMATE_DISASTER,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The stable label used in config files and on the command line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None             => "none",
            Self::Pandemic         => "pandemic",
            Self::WorldWar         => "worldWar",
            Self::EconomicCollapse => "economicCollapse",
            Self::AiSingularity    => "ai_singularity",
            Self::ClimateDisaster  => "climate_disaster",
        }
    }
}

impl fmt::Display for BlackSwanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BlackSwanKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| SimError::UnknownBlackSwanEvent { label: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for kind in BlackSwanKind::ALL {
            assert_eq!(kind.label().parse::<BlackSwanKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "meteor".parse::<BlackSwanKind>().unwrap_err();
        assert!(matches!(err, SimError::UnknownBlackSwanEvent { ref label } if label == "meteor"));
    }

    #[test]
    fn none_is_identity_effect() {
        let e = BlackSwanKind::None.event();
        assert_eq!(e.population_impact, 1.0);
        assert_eq!(e.life_expectancy_impact, 0.0);
        assert_eq!(e.economic_impact, 1.0);
    }

    #[test]
    fn singularity_reports_negative_decrease() {
        let e = BlackSwanKind::AiSingularity.event();
        assert!((e.economic_decrease_pct() - -50.0).abs() < 1e-9);
        assert_eq!(e.population_decrease_pct(), 0.0);
    }
}
