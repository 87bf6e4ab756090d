use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPECTED_LIFESPAN: u32 = 80;
pub const DEFAULT_RETIREMENT_AGE: u32 = 67;
pub const DEFAULT_WORK_HOURS_PER_WEEK: f64 = 40.0;
pub const DEFAULT_VACATION_WEEKS_PER_YEAR: u32 = 3;

const DAYS_PER_YEAR: f64 = 365.25;
const DAYS_PER_WEEK: i64 = 7;
const WEEKS_PER_YEAR: i64 = 52;

/// Life figures for one birthdate, measured at `today`.
///
/// Nothing here is cached: every accessor derives its value from the two
/// dates and the assumptions, so a copy of this struct is all the dependent
/// calculators need.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LifeStats {
    pub birthdate: NaiveDate,
    pub today: NaiveDate,
    pub expected_lifespan: u32,
    pub retirement_age: u32,
    pub work_hours_per_week: f64,
    pub vacation_weeks_per_year: u32,
}

impl LifeStats {
    pub fn new(birthdate: NaiveDate, today: NaiveDate) -> Self {
        Self {
            birthdate,
            today,
            expected_lifespan: DEFAULT_EXPECTED_LIFESPAN,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            work_hours_per_week: DEFAULT_WORK_HOURS_PER_WEEK,
            vacation_weeks_per_year: DEFAULT_VACATION_WEEKS_PER_YEAR,
        }
    }

    pub fn with_expected_lifespan(mut self, years: u32) -> Self {
        self.expected_lifespan = years;
        self
    }

    pub fn with_retirement_age(mut self, years: u32) -> Self {
        self.retirement_age = years;
        self
    }

    pub fn with_work_hours_per_week(mut self, hours: f64) -> Self {
        self.work_hours_per_week = hours;
        self
    }

    pub fn with_vacation_weeks_per_year(mut self, weeks: u32) -> Self {
        self.vacation_weeks_per_year = weeks;
        self
    }

    pub fn days_lived(&self) -> i64 {
        self.today.signed_duration_since(self.birthdate).num_days()
    }

    pub fn age_years(&self) -> f64 {
        self.days_lived() as f64 / DAYS_PER_YEAR
    }

    /// Complete weeks since birth. A partial final week does not count.
    pub fn weeks_lived(&self) -> i64 {
        self.days_lived().div_euclid(DAYS_PER_WEEK)
    }

    /// `expected_lifespan * 52`, ignoring leap-year drift.
    pub fn total_weeks(&self) -> i64 {
        i64::from(self.expected_lifespan) * WEEKS_PER_YEAR
    }

    pub fn weeks_remaining(&self) -> i64 {
        (self.total_weeks() - self.weeks_lived()).max(0)
    }

    /// Not clamped: above 100 means the lifespan assumption has been outlived.
    pub fn percentage_lived(&self) -> f64 {
        let total = self.total_weeks();
        if total == 0 {
            return 0.0;
        }
        self.weeks_lived() as f64 / total as f64 * 100.0
    }

    pub fn days_remaining(&self) -> i64 {
        self.weeks_remaining() * DAYS_PER_WEEK
    }

    pub fn years_remaining(&self) -> f64 {
        self.weeks_remaining() as f64 / WEEKS_PER_YEAR as f64
    }
}
