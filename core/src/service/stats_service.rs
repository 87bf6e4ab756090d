use std::cell::OnceCell;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::model::config::MementoConfig;
use crate::model::free_time::FreeTimeStats;
use crate::model::life::LifeStats;
use crate::model::parent_time::ParentTimeStats;
use crate::model::weekend::WeekendStats;
use crate::model::work_life::WorkLifeStats;
use crate::model::year::YearStats;
use crate::repository::ConfigRepository;

/// Every input the calculators take, with defaults already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsParams {
    pub birthdate: NaiveDate,
    pub expected_lifespan: u32,
    pub retirement_age: u32,
    pub work_hours_per_week: f64,
    pub vacation_weeks_per_year: u32,
    pub sleep_hours_per_day: f64,
    pub work_hours_per_day: f64,
    pub chores_hours_per_day: f64,
    pub started_working_age: u32,
    pub father_age: Option<u32>,
    pub mother_age: Option<u32>,
    pub visits_per_year: u32,
    pub days_per_visit: u32,
    pub parent_life_expectancy: u32,
}

impl Default for StatsParams {
    fn default() -> Self {
        Self::from(&MementoConfig::default())
    }
}

impl From<&MementoConfig> for StatsParams {
    fn from(config: &MementoConfig) -> Self {
        Self {
            birthdate: config.birthdate,
            expected_lifespan: config.expected_lifespan,
            retirement_age: config.retirement_age,
            work_hours_per_week: config.time_assumptions.work_hours_per_week,
            vacation_weeks_per_year: config.vacation_weeks_per_year,
            sleep_hours_per_day: config.time_assumptions.sleep_hours_per_day,
            work_hours_per_day: config.time_assumptions.work_hours_per_day,
            chores_hours_per_day: config.time_assumptions.chores_hours_per_day,
            started_working_age: config.life_milestones.started_working_age,
            father_age: config.parents.father_age,
            mother_age: config.parents.mother_age,
            visits_per_year: config.parents.visits_per_year,
            days_per_visit: config.parents.days_per_visit,
            parent_life_expectancy: config.life_milestones.parent_life_expectancy,
        }
    }
}

/// The full set of statistics for one invocation.
///
/// `free_time`, `work` and `weekends` each hold their own copy of `life`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllStats {
    pub life: LifeStats,
    pub free_time: FreeTimeStats,
    pub work: WorkLifeStats,
    pub parents: ParentTimeStats,
    pub weekends: WeekendStats,
}

pub fn calculate_all_stats(params: &StatsParams, today: NaiveDate) -> AllStats {
    let life = LifeStats::new(params.birthdate, today)
        .with_expected_lifespan(params.expected_lifespan)
        .with_retirement_age(params.retirement_age)
        .with_work_hours_per_week(params.work_hours_per_week)
        .with_vacation_weeks_per_year(params.vacation_weeks_per_year);

    AllStats {
        life,
        free_time: FreeTimeStats::new(life).with_hours(
            params.sleep_hours_per_day,
            params.work_hours_per_day,
            params.chores_hours_per_day,
        ),
        work: WorkLifeStats::new(life).with_started_working_age(params.started_working_age),
        parents: ParentTimeStats::new(params.father_age, params.mother_age)
            .with_visits(params.visits_per_year, params.days_per_visit)
            .with_life_expectancy(params.parent_life_expectancy),
        weekends: WeekendStats::new(life),
    }
}

/// Reads the config at most once; every later call works from that copy.
pub struct StatsService<R: ConfigRepository> {
    repo: R,
    birthdate_override: Option<NaiveDate>,
    loaded: OnceCell<MementoConfig>,
}

impl<R: ConfigRepository> StatsService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            birthdate_override: None,
            loaded: OnceCell::new(),
        }
    }

    /// Replaces the configured birthdate for this service only; the file is
    /// not touched.
    pub fn with_birthdate(mut self, birthdate: Option<NaiveDate>) -> Self {
        self.birthdate_override = birthdate;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn loaded_config(&self) -> Result<&MementoConfig> {
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }
        let config = self.repo.load()?;
        Ok(self.loaded.get_or_init(|| config))
    }

    /// The loaded config with the birthdate override applied, checked
    /// against `today`.
    pub fn get_config(&self, today: NaiveDate) -> Result<MementoConfig> {
        let mut config = self.loaded_config()?.clone();
        if let Some(birthdate) = self.birthdate_override {
            config.birthdate = birthdate;
        }
        config.validate(today)?;
        Ok(config)
    }

    pub fn get_stats(&self, today: NaiveDate) -> Result<AllStats> {
        let config = self.get_config(today)?;
        let params = StatsParams::from(&config);
        debug!(birthdate = %params.birthdate, %today, "calculating life stats");
        Ok(calculate_all_stats(&params, today))
    }

    pub fn get_year_stats(&self, today: NaiveDate) -> YearStats {
        YearStats::new(today)
    }
}
