use serde::{Deserialize, Serialize};

use crate::model::life::LifeStats;

pub const DEFAULT_SLEEP_HOURS_PER_DAY: f64 = 9.0;
pub const DEFAULT_WORK_HOURS_PER_DAY: f64 = 8.1;
pub const DEFAULT_CHORES_HOURS_PER_DAY: f64 = 2.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Time left over once sleep, work and chores are taken out of each day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FreeTimeStats {
    pub life: LifeStats,
    pub sleep_hours_per_day: f64,
    pub work_hours_per_day: f64,
    pub chores_hours_per_day: f64,
}

impl FreeTimeStats {
    pub fn new(life: LifeStats) -> Self {
        Self {
            life,
            sleep_hours_per_day: DEFAULT_SLEEP_HOURS_PER_DAY,
            work_hours_per_day: DEFAULT_WORK_HOURS_PER_DAY,
            chores_hours_per_day: DEFAULT_CHORES_HOURS_PER_DAY,
        }
    }

    pub fn with_hours(mut self, sleep: f64, work: f64, chores: f64) -> Self {
        self.sleep_hours_per_day = sleep;
        self.work_hours_per_day = work;
        self.chores_hours_per_day = chores;
        self
    }

    pub fn total_obligated_hours_per_day(&self) -> f64 {
        self.sleep_hours_per_day + self.work_hours_per_day + self.chores_hours_per_day
    }

    pub fn free_hours_per_day(&self) -> f64 {
        (HOURS_PER_DAY - self.total_obligated_hours_per_day()).max(0.0)
    }

    pub fn free_time_percentage(&self) -> f64 {
        self.free_hours_per_day() / HOURS_PER_DAY * 100.0
    }

    pub fn free_weeks_lived(&self) -> i64 {
        (self.life.weeks_lived() as f64 * (self.free_time_percentage() / 100.0)) as i64
    }

    pub fn free_weeks_remaining(&self) -> i64 {
        (self.life.weeks_remaining() as f64 * (self.free_time_percentage() / 100.0)) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn life() -> LifeStats {
        LifeStats::new(
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_default_allocation() {
        let free = FreeTimeStats::new(life());

        assert!((free.total_obligated_hours_per_day() - 19.1).abs() < 1e-9);
        assert!((free.free_hours_per_day() - 4.9).abs() < 1e-9);
        assert!((free.free_time_percentage() - 20.4166).abs() < 0.001);
    }

    #[test]
    fn test_free_weeks_truncate() {
        let free = FreeTimeStats::new(life());

        // 1774 * 0.2041666 = 362.19..., 2386 * 0.2041666 = 487.14...
        assert_eq!(free.free_weeks_lived(), 362);
        assert_eq!(free.free_weeks_remaining(), 487);
    }

    #[test]
    fn test_overcommitted_day_clamps_to_zero() {
        let free = FreeTimeStats::new(life()).with_hours(10.0, 12.0, 3.0);

        assert_eq!(free.free_hours_per_day(), 0.0);
        assert_eq!(free.free_time_percentage(), 0.0);
        assert_eq!(free.free_weeks_lived(), 0);
        assert_eq!(free.free_weeks_remaining(), 0);
    }

    #[test]
    fn test_exactly_full_day() {
        let free = FreeTimeStats::new(life()).with_hours(8.0, 8.0, 8.0);
        assert_eq!(free.free_hours_per_day(), 0.0);
    }
}
