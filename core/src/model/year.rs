use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::{self, MONTH_NAMES};

/// One Saturday/Sunday pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weekend {
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
}

/// Progress through the calendar year containing `today`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStats {
    pub today: NaiveDate,
}

impl YearStats {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn current() -> Self {
        Self::new(time::local_today())
    }

    pub fn year(&self) -> i32 {
        self.today.year()
    }

    pub fn year_start(&self) -> NaiveDate {
        time::year_start(self.today)
    }

    pub fn year_end(&self) -> NaiveDate {
        time::year_end(self.today)
    }

    pub fn days_in_year(&self) -> i64 {
        self.year_end().signed_duration_since(self.year_start()).num_days() + 1
    }

    pub fn days_elapsed(&self) -> i64 {
        self.today.signed_duration_since(self.year_start()).num_days()
    }

    pub fn days_remaining(&self) -> i64 {
        self.year_end().signed_duration_since(self.today).num_days()
    }

    pub fn weeks_remaining(&self) -> f64 {
        self.days_remaining() as f64 / 7.0
    }

    /// Whole calendar months after the current one; the day of month is ignored.
    pub fn months_remaining(&self) -> u32 {
        12 - self.today.month()
    }

    pub fn year_progress_percentage(&self) -> f64 {
        self.days_elapsed() as f64 / self.days_in_year() as f64 * 100.0
    }

    /// Saturday/Sunday pairs from today to the end of the year.
    ///
    /// Starts on today when today is a Saturday. A Saturday on December 31st
    /// has no Sunday left in the year and is dropped.
    pub fn remaining_weekends(&self) -> Vec<Weekend> {
        let year_end = self.year_end();
        let mut weekends = Vec::new();
        let mut saturday = time::next_saturday(self.today);

        while saturday <= year_end {
            let sunday = saturday + Duration::days(1);
            if sunday <= year_end {
                weekends.push(Weekend { saturday, sunday });
            }
            saturday += Duration::days(7);
        }

        weekends
    }

    /// Names of the months strictly after the current one.
    pub fn remaining_month_names(&self) -> Vec<&'static str> {
        MONTH_NAMES[self.today.month() as usize..].to_vec()
    }

    /// Weekend days left this year, optionally scaled by the free-time share
    /// of a day when sleep and chores still apply on weekends.
    pub fn free_weekend_days(&self, free_time_percentage: f64, obligations_on_weekends: bool) -> i64 {
        let total_weekend_days = self.remaining_weekends().len() as i64 * 2;

        if obligations_on_weekends {
            (total_weekend_days as f64 * (free_time_percentage / 100.0)) as i64
        } else {
            total_weekend_days
        }
    }
}
