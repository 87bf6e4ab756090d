use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::model::year::{Weekend, YearStats};
use crate::repository::ConfigRepository;
use crate::service::dto::{MonthWeekends, ProgressBand, YearOverview};
use crate::service::stats_service::StatsService;
use crate::time::month_name;

// One family gathering for roughly every eight free weekend days.
const FREE_DAYS_PER_GATHERING: i64 = 8;
const MIN_GATHERINGS: i64 = 2;

pub fn suggested_gatherings(free_weekend_days: i64) -> i64 {
    (free_weekend_days / FREE_DAYS_PER_GATHERING).max(MIN_GATHERINGS)
}

/// Groups weekends by the month their Saturday falls in, keeping order.
pub fn group_by_month(weekends: &[Weekend]) -> Vec<MonthWeekends> {
    let mut groups: Vec<MonthWeekends> = Vec::new();
    for weekend in weekends {
        let month = month_name(weekend.saturday.month());
        if let Some(group) = groups.last_mut().filter(|g| g.month == month) {
            group.weekends.push(*weekend);
            continue;
        }
        groups.push(MonthWeekends {
            month: month.to_string(),
            weekends: vec![*weekend],
        });
    }
    groups
}

pub fn build_year_overview(year: &YearStats, free_time_percentage: f64) -> YearOverview {
    let weekends = year.remaining_weekends();
    let free_weekend_days = year.free_weekend_days(free_time_percentage, true);
    let progress = year.year_progress_percentage();

    YearOverview {
        today: year.today,
        year: year.year(),
        days_in_year: year.days_in_year(),
        days_elapsed: year.days_elapsed(),
        days_remaining: year.days_remaining(),
        weeks_remaining: year.weeks_remaining(),
        months_remaining: year.months_remaining(),
        remaining_months: year
            .remaining_month_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        progress_percentage: progress,
        progress_band: ProgressBand::for_year(progress),
        weekends_by_month: group_by_month(&weekends),
        weekend_days: weekends.len() as i64 * 2,
        weekends,
        free_time_percentage,
        free_weekend_days,
        suggested_gatherings: suggested_gatherings(free_weekend_days),
    }
}

pub struct YearOverviewUseCase<'a, R: ConfigRepository> {
    stats_service: &'a StatsService<R>,
}

impl<'a, R: ConfigRepository> YearOverviewUseCase<'a, R> {
    pub fn new(stats_service: &'a StatsService<R>) -> Self {
        Self { stats_service }
    }

    /// The free-time share comes from the configured daily allocations.
    pub fn get_overview(&self, today: NaiveDate) -> Result<YearOverview> {
        let stats = self.stats_service.get_stats(today)?;
        let year = self.stats_service.get_year_stats(today);
        Ok(build_year_overview(&year, stats.free_time.free_time_percentage()))
    }
}
