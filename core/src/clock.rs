//! Projection clock: owns which year runs next.

use crate::types::Year;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionClock {
    /// Last year to simulate, inclusive.
    pub horizon: Year,
    /// `None` once the horizon year has run.
    next_year: Option<Year>,
}

impl ProjectionClock {
    pub fn new(horizon: Year) -> Self {
        Self { horizon, next_year: Some(0) }
    }

    /// Hand out the next year to simulate, or `None` past the horizon.
    pub fn advance(&mut self) -> Option<Year> {
        let year = self.next_year?;
        self.next_year = if year < self.horizon { Some(year + 1) } else { None };
        Some(year)
    }

    pub fn is_finished(&self) -> bool {
        self.next_year.is_none()
    }
}
