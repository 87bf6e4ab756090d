//! On-disk configuration.
//!
//! Every field carries a serde default, so a partial file (or a file written
//! by an older version) loads with the missing values filled in. Defaults are
//! resolved here once; nothing downstream looks up fallbacks again.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::free_time::{
    DEFAULT_CHORES_HOURS_PER_DAY, DEFAULT_SLEEP_HOURS_PER_DAY, DEFAULT_WORK_HOURS_PER_DAY,
};
use crate::model::life::{
    DEFAULT_EXPECTED_LIFESPAN, DEFAULT_RETIREMENT_AGE, DEFAULT_VACATION_WEEKS_PER_YEAR,
    DEFAULT_WORK_HOURS_PER_WEEK,
};
use crate::model::parent_time::{
    DEFAULT_DAYS_PER_VISIT, DEFAULT_PARENT_LIFE_EXPECTANCY, DEFAULT_VISITS_PER_YEAR,
};
use crate::model::work_life::DEFAULT_STARTED_WORKING_AGE;

pub const DEFAULT_NOTIFICATION_TIME: &str = "08:00";
pub const DEFAULT_NOTIFICATION_STYLE: &str = "motivational";
pub const MAX_EXPECTED_LIFESPAN: u32 = 150;

fn default_birthdate() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MementoConfig {
    pub birthdate: NaiveDate,
    pub expected_lifespan: u32,
    pub retirement_age: u32,
    pub vacation_weeks_per_year: u32,
    pub time_assumptions: TimeAssumptions,
    pub life_milestones: LifeMilestones,
    pub parents: ParentsConfig,
    pub notification_time: String,
    pub notification_style: String,
    pub show_grid: bool,
}

impl Default for MementoConfig {
    fn default() -> Self {
        Self {
            birthdate: default_birthdate(),
            expected_lifespan: DEFAULT_EXPECTED_LIFESPAN,
            retirement_age: DEFAULT_RETIREMENT_AGE,
            vacation_weeks_per_year: DEFAULT_VACATION_WEEKS_PER_YEAR,
            time_assumptions: TimeAssumptions::default(),
            life_milestones: LifeMilestones::default(),
            parents: ParentsConfig::default(),
            notification_time: DEFAULT_NOTIFICATION_TIME.to_string(),
            notification_style: DEFAULT_NOTIFICATION_STYLE.to_string(),
            show_grid: false,
        }
    }
}

/// Hours per day (and per week) spent on obligations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TimeAssumptions {
    pub sleep_hours_per_day: f64,
    pub work_hours_per_day: f64,
    pub chores_hours_per_day: f64,
    pub work_hours_per_week: f64,
}

impl Default for TimeAssumptions {
    fn default() -> Self {
        Self {
            sleep_hours_per_day: DEFAULT_SLEEP_HOURS_PER_DAY,
            work_hours_per_day: DEFAULT_WORK_HOURS_PER_DAY,
            chores_hours_per_day: DEFAULT_CHORES_HOURS_PER_DAY,
            work_hours_per_week: DEFAULT_WORK_HOURS_PER_WEEK,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct LifeMilestones {
    pub started_working_age: u32,
    pub parent_life_expectancy: u32,
}

impl Default for LifeMilestones {
    fn default() -> Self {
        Self {
            started_working_age: DEFAULT_STARTED_WORKING_AGE,
            parent_life_expectancy: DEFAULT_PARENT_LIFE_EXPECTANCY,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ParentsConfig {
    pub father_age: Option<u32>,
    pub mother_age: Option<u32>,
    pub visits_per_year: u32,
    pub days_per_visit: u32,
}

impl Default for ParentsConfig {
    fn default() -> Self {
        Self {
            father_age: None,
            mother_age: None,
            visits_per_year: DEFAULT_VISITS_PER_YEAR,
            days_per_visit: DEFAULT_DAYS_PER_VISIT,
        }
    }
}

impl MementoConfig {
    /// Rejects values the calculators cannot make sense of.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ConfigError> {
        if self.expected_lifespan == 0 || self.expected_lifespan > MAX_EXPECTED_LIFESPAN {
            return Err(ConfigError::InvalidLifespan(self.expected_lifespan));
        }
        if self.birthdate > today {
            return Err(ConfigError::BirthdateInFuture {
                birthdate: self.birthdate,
                today,
            });
        }

        let hours = [
            ("sleep_hours_per_day", self.time_assumptions.sleep_hours_per_day),
            ("work_hours_per_day", self.time_assumptions.work_hours_per_day),
            ("chores_hours_per_day", self.time_assumptions.chores_hours_per_day),
            ("work_hours_per_week", self.time_assumptions.work_hours_per_week),
        ];
        for (field, value) in hours {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeHours { field, value });
            }
        }

        Ok(())
    }
}
