//! Farm clock: owns the day counter.

use crate::types::Day;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmClock {
    pub current_day: Day,
}

impl FarmClock {
    pub fn new() -> Self {
        Self { current_day: 0 }
    }

    /// Advance one day. Returns the new day number.
    pub fn advance(&mut self) -> Day {
        self.advance_by(1)
    }

    /// Skip ahead `days` days at once. Used when nothing is left growing.
    pub fn advance_by(&mut self, days: Day) -> Day {
        self.current_day = self.current_day.saturating_add(days);
        self.current_day
    }
}
