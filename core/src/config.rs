use crate::{
    black_swan::BlackSwanKind,
    error::{SimError, SimResult},
    types::{Percent, Year},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How quickly one part of society responds to rising life expectancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdaptationRate {
    Low,
    #[default]
    Medium,
    High,
}

impl AdaptationRate {
    pub fn factor(&self) -> f64 {
        match self {
            Self::Low    => 0.5,
            Self::Medium => 1.0,
            Self::High   => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low    => "low",
            Self::Medium => "medium",
            Self::High   => "high",
        }
    }
}

impl fmt::Display for AdaptationRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AdaptationRate {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low"    => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high"   => Ok(Self::High),
            other    => Err(SimError::UnknownAdaptationRate { label: other.to_string() }),
        }
    }
}

/// The four adaptation inputs resolved to their multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptationFactors {
    pub societal:       f64,
    pub workforce:      f64,
    pub infrastructure: f64,
    pub legal:          f64,
}

/// Everything a projection run needs. Immutable once the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    pub population: f64,
    pub life_expectancy: f64,
    pub retirement_age: f64,
    pub longevity_breakthrough_probability: Percent,
    /// Years added to life expectancy when the breakthrough fires.
    pub longevity_breakthrough_impact: f64,
    pub healthcare_expenditure_per_capita: f64,
    /// Last simulated year; the run covers 0..=years.
    pub years: Year,
    /// Annual growth, in percent.
    pub economic_growth_rate: f64,
    pub societal_adaptation_rate: AdaptationRate,
    pub workforce_adaptation_rate: AdaptationRate,
    pub infrastructure_readiness: AdaptationRate,
    pub legal_framework_adaptation: AdaptationRate,
    pub black_swan_event_type: BlackSwanKind,
    pub black_swan_event_year: Year,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 1_000_000.0,
            life_expectancy: 80.0,
            retirement_age: 65.0,
            longevity_breakthrough_probability: 0.0,
            longevity_breakthrough_impact: 10.0,
            healthcare_expenditure_per_capita: 10_000.0,
            years: 50,
            economic_growth_rate: 2.0,
            societal_adaptation_rate: AdaptationRate::Medium,
            workforce_adaptation_rate: AdaptationRate::Medium,
            infrastructure_readiness: AdaptationRate::Medium,
            legal_framework_adaptation: AdaptationRate::Medium,
            black_swan_event_type: BlackSwanKind::None,
            black_swan_event_year: 10,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a JSON config file. Missing fields take their
    /// `Default` values.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject inputs the engine cannot project from. Called by the engine
    /// before the first year runs.
    pub fn validate(&self) -> SimResult<()> {
        require_positive("population", self.population)?;
        require_positive("lifeExpectancy", self.life_expectancy)?;
        require_positive("retirementAge", self.retirement_age)?;
        require_positive(
            "healthcareExpenditurePerCapita",
            self.healthcare_expenditure_per_capita,
        )?;
        require_finite("longevityBreakthroughImpact", self.longevity_breakthrough_impact)?;
        require_finite("economicGrowthRate", self.economic_growth_rate)?;

        let p = self.longevity_breakthrough_probability;
        if !(0.0..=100.0).contains(&p) {
            return Err(SimError::InvalidConfig {
                field:  "longevityBreakthroughProbability",
                reason: format!("must be within [0, 100], got {p}"),
            });
        }

        if !self.black_swan_event_type.is_none() && self.black_swan_event_year > self.years {
            log::warn!(
                "black swan '{}' scheduled for year {} is beyond the {}-year horizon and will not fire",
                self.black_swan_event_type,
                self.black_swan_event_year,
                self.years
            );
        }
        Ok(())
    }

    pub fn adaptation_factors(&self) -> AdaptationFactors {
        AdaptationFactors {
            societal:       self.societal_adaptation_rate.factor(),
            workforce:      self.workforce_adaptation_rate.factor(),
            infrastructure: self.infrastructure_readiness.factor(),
            legal:          self.legal_framework_adaptation.factor(),
        }
    }

    /// Whether the scripted shock fires in `year`.
    pub fn black_swan_fires_in(&self, year: Year) -> bool {
        !self.black_swan_event_type.is_none() && year == self.black_swan_event_year
    }
}

fn require_finite(field: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, reason: format!("must be finite, got {value}") })
    }
}

fn require_positive(field: &'static str, value: f64) -> SimResult<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidConfig { field, reason: format!("must be positive, got {value}") })
    }
}
