use serde::{Deserialize, Serialize};

use crate::model::life::LifeStats;

pub const DEFAULT_STARTED_WORKING_AGE: u32 = 22;

const WEEKS_PER_YEAR: f64 = 52.0;

/// Working-life projection up to `LifeStats::retirement_age`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WorkLifeStats {
    pub life: LifeStats,
    pub started_working_age: u32,
}

impl WorkLifeStats {
    pub fn new(life: LifeStats) -> Self {
        Self {
            life,
            started_working_age: DEFAULT_STARTED_WORKING_AGE,
        }
    }

    pub fn with_started_working_age(mut self, age: u32) -> Self {
        self.started_working_age = age;
        self
    }

    pub fn years_until_retirement(&self) -> f64 {
        (f64::from(self.life.retirement_age) - self.life.age_years()).max(0.0)
    }

    pub fn weeks_until_retirement(&self) -> i64 {
        (self.years_until_retirement() * WEEKS_PER_YEAR) as i64
    }

    pub fn vacation_weeks_remaining(&self) -> i64 {
        (self.years_until_retirement() * f64::from(self.life.vacation_weeks_per_year)) as i64
    }

    /// Length of the whole working life, start to retirement.
    pub fn working_years_total(&self) -> f64 {
        (f64::from(self.life.retirement_age) - f64::from(self.started_working_age)).max(0.0)
    }

    pub fn years_worked(&self) -> f64 {
        (self.life.age_years() - f64::from(self.started_working_age))
            .clamp(0.0, self.working_years_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn life_at(birth_year: i32) -> LifeStats {
        LifeStats::new(
            NaiveDate::from_ymd_opt(birth_year, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_until_retirement() {
        let work = WorkLifeStats::new(life_at(1990));
        let age = work.life.age_years();

        assert!((work.years_until_retirement() - (67.0 - age)).abs() < 1e-9);
        assert_eq!(work.weeks_until_retirement(), ((67.0 - age) * 52.0) as i64);
        assert_eq!(work.vacation_weeks_remaining(), ((67.0 - age) * 3.0) as i64);
    }

    #[test]
    fn test_already_retired_clamps() {
        let work = WorkLifeStats::new(life_at(1940));

        assert_eq!(work.years_until_retirement(), 0.0);
        assert_eq!(work.weeks_until_retirement(), 0);
        assert_eq!(work.vacation_weeks_remaining(), 0);
        assert_eq!(work.years_worked(), work.working_years_total());
    }

    #[test]
    fn test_years_worked() {
        let work = WorkLifeStats::new(life_at(1990)).with_started_working_age(22);
        assert_eq!(work.working_years_total(), 45.0);
        assert!((work.years_worked() - (work.life.age_years() - 22.0)).abs() < 1e-9);

        let student = WorkLifeStats::new(life_at(2010));
        assert_eq!(student.years_worked(), 0.0);
    }
}
