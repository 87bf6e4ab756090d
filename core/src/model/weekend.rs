use serde::{Deserialize, Serialize};

use crate::model::life::LifeStats;

/// Lifetime weekends, one per remaining week.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WeekendStats {
    pub life: LifeStats,
}

impl WeekendStats {
    pub fn new(life: LifeStats) -> Self {
        Self { life }
    }

    pub fn weekends_remaining(&self) -> i64 {
        self.life.weeks_remaining()
    }

    pub fn weekend_days_remaining(&self) -> i64 {
        self.weekends_remaining() * 2
    }
}
