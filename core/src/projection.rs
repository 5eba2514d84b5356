//! Projection output: one `YearRecord` per simulated year plus the insight
//! stream.

use crate::{event::InsightEvent, types::Year};
use serde::{Deserialize, Serialize};

/// Metrics at the end of one simulated year.
///
/// Counts are rounded to the nearest integer; `economic_growth_rate` keeps
/// its fractional precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: Year,
    pub population: i64,
    pub life_expectancy: i64,
    pub retirement_age: i64,
    pub healthcare_expenditure: i64,
    pub workforce: i64,
    pub economic_growth_rate: f64,
    pub centenarians: i64,
    pub supercentenarians: i64,
    pub cancer_incidence_in_centenarians: i64,
}

/// The full result of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub seed: Option<u64>,
    pub records: Vec<YearRecord>,
    pub insights: Vec<InsightEvent>,
}

impl Projection {
    pub fn record(&self, year: Year) -> Option<&YearRecord> {
        self.records.get(year as usize)
    }

    /// Year the longevity breakthrough fired, if it did.
    pub fn breakthrough_year(&self) -> Option<Year> {
        self.insights
            .iter()
            .find(|e| e.is_breakthrough())
            .map(InsightEvent::year)
    }

    pub fn insights_for_year(&self, year: Year) -> impl Iterator<Item = &InsightEvent> {
        self.insights.iter().filter(move |e| e.year() == year)
    }
}
