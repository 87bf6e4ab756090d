use anyhow::Result;
use chrono::NaiveDate;

use crate::repository::ConfigRepository;
use crate::service::dto::{
    FamilySection, FreeTimeSection, LifeSection, ProgressBand, SummaryView, WeekendSection,
    WorkSection,
};
use crate::service::stats_service::{AllStats, StatsService};

// Thresholds in percent of expected life, checked from the top.
const WISDOM: [(f64, &str); 5] = [
    (80.0, "The fear of death follows from the fear of life. Live fully. — Mark Twain"),
    (60.0, "Do not regret growing older. It is a privilege denied to many."),
    (40.0, "The only way to do great work is to love what you do. — Steve Jobs"),
    (20.0, "The days are long but the decades are short. — Sam Altman"),
    (0.0, "Every beginning is a consequence. — Paul Valéry"),
];
const FALLBACK_WISDOM: &str =
    "Time is the most valuable thing a person can spend. — Theophrastus";

pub fn wisdom_quote(percentage_lived: f64) -> &'static str {
    WISDOM
        .iter()
        .find(|(threshold, _)| percentage_lived >= *threshold)
        .map(|(_, quote)| *quote)
        .unwrap_or(FALLBACK_WISDOM)
}

pub fn build_summary(stats: &AllStats) -> SummaryView {
    let life = &stats.life;
    let parents = &stats.parents;

    let total_days = parents.total_days_left();
    let family = (total_days > 0).then(|| FamilySection {
        days_with_father: parents.days_left_with_father().known(),
        days_with_mother: parents.days_left_with_mother().known(),
        total_days,
    });

    SummaryView {
        today: life.today,
        birthdate: life.birthdate,
        life: LifeSection {
            expected_lifespan: life.expected_lifespan,
            age_years: life.age_years(),
            weeks_lived: life.weeks_lived(),
            weeks_remaining: life.weeks_remaining(),
            total_weeks: life.total_weeks(),
            percentage_lived: life.percentage_lived(),
            days_remaining: life.days_remaining(),
            years_remaining: life.years_remaining(),
            progress_band: ProgressBand::for_life(life.percentage_lived()),
        },
        free_time: FreeTimeSection {
            free_hours_per_day: stats.free_time.free_hours_per_day(),
            free_time_percentage: stats.free_time.free_time_percentage(),
            free_weeks_lived: stats.free_time.free_weeks_lived(),
            free_weeks_remaining: stats.free_time.free_weeks_remaining(),
        },
        work: WorkSection {
            years_until_retirement: stats.work.years_until_retirement(),
            weeks_until_retirement: stats.work.weeks_until_retirement(),
            vacation_weeks_remaining: stats.work.vacation_weeks_remaining(),
            years_worked: stats.work.years_worked(),
            working_years_total: stats.work.working_years_total(),
        },
        family,
        weekends: WeekendSection {
            weekends_remaining: stats.weekends.weekends_remaining(),
            weekend_days_remaining: stats.weekends.weekend_days_remaining(),
        },
        wisdom: wisdom_quote(life.percentage_lived()).to_string(),
    }
}

pub struct SummaryUseCase<'a, R: ConfigRepository> {
    stats_service: &'a StatsService<R>,
}

impl<'a, R: ConfigRepository> SummaryUseCase<'a, R> {
    pub fn new(stats_service: &'a StatsService<R>) -> Self {
        Self { stats_service }
    }

    pub fn get_summary(&self, today: NaiveDate) -> Result<SummaryView> {
        let stats = self.stats_service.get_stats(today)?;
        Ok(build_summary(&stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wisdom_thresholds() {
        assert!(wisdom_quote(0.0).contains("Valéry"));
        assert!(wisdom_quote(19.9).contains("Valéry"));
        assert!(wisdom_quote(20.0).contains("Altman"));
        assert!(wisdom_quote(42.6).contains("Jobs"));
        assert!(wisdom_quote(65.0).starts_with("Do not regret"));
        assert!(wisdom_quote(120.0).contains("Twain"));
        assert!(wisdom_quote(-1.0).contains("Theophrastus"));
    }
}
