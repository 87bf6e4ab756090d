use chrono::NaiveDate;
use serde::Serialize;

use crate::model::year::Weekend;

/// Colour band for a progress bar.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBand {
    Green,
    Yellow,
    Red,
}

impl ProgressBand {
    pub fn for_life(percentage: f64) -> Self {
        if percentage < 50.0 {
            ProgressBand::Yellow
        } else {
            ProgressBand::Red
        }
    }

    pub fn for_year(percentage: f64) -> Self {
        if percentage < 75.0 {
            ProgressBand::Green
        } else if percentage < 90.0 {
            ProgressBand::Yellow
        } else {
            ProgressBand::Red
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LifeSection {
    pub expected_lifespan: u32,
    pub age_years: f64,
    pub weeks_lived: i64,
    pub weeks_remaining: i64,
    pub total_weeks: i64,
    pub percentage_lived: f64,
    pub days_remaining: i64,
    pub years_remaining: f64,
    pub progress_band: ProgressBand,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FreeTimeSection {
    pub free_hours_per_day: f64,
    pub free_time_percentage: f64,
    pub free_weeks_lived: i64,
    pub free_weeks_remaining: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkSection {
    pub years_until_retirement: f64,
    pub weeks_until_retirement: i64,
    pub vacation_weeks_remaining: i64,
    pub years_worked: f64,
    pub working_years_total: f64,
}

/// Only built when there is at least one day left with a parent.
/// A `None` per-parent entry means that parent's age is unknown.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FamilySection {
    pub days_with_father: Option<u32>,
    pub days_with_mother: Option<u32>,
    pub total_days: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeekendSection {
    pub weekends_remaining: i64,
    pub weekend_days_remaining: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub today: NaiveDate,
    pub birthdate: NaiveDate,
    pub life: LifeSection,
    pub free_time: FreeTimeSection,
    pub work: WorkSection,
    pub family: Option<FamilySection>,
    pub weekends: WeekendSection,
    pub wisdom: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekCell {
    Lived,
    Current,
    Remaining,
    Beyond,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GridRow {
    pub year: u32,
    pub decade_marker: bool,
    pub cells: Vec<WeekCell>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LifeGrid {
    pub expected_lifespan: u32,
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub weeks_remaining: i64,
    pub percentage_lived: f64,
    pub rows: Vec<GridRow>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthWeekends {
    pub month: String,
    pub weekends: Vec<Weekend>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearOverview {
    pub today: NaiveDate,
    pub year: i32,
    pub days_in_year: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub weeks_remaining: f64,
    pub months_remaining: u32,
    pub remaining_months: Vec<String>,
    pub progress_percentage: f64,
    pub progress_band: ProgressBand,
    pub weekends: Vec<Weekend>,
    pub weekends_by_month: Vec<MonthWeekends>,
    pub weekend_days: i64,
    pub free_time_percentage: f64,
    pub free_weekend_days: i64,
    pub suggested_gatherings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bands() {
        assert_eq!(ProgressBand::for_life(49.9), ProgressBand::Yellow);
        assert_eq!(ProgressBand::for_life(50.0), ProgressBand::Red);
        assert_eq!(ProgressBand::for_year(74.9), ProgressBand::Green);
        assert_eq!(ProgressBand::for_year(75.0), ProgressBand::Yellow);
        assert_eq!(ProgressBand::for_year(90.0), ProgressBand::Red);
    }
}
