use serde::{Deserialize, Serialize};

pub const DEFAULT_VISITS_PER_YEAR: u32 = 10;
pub const DEFAULT_DAYS_PER_VISIT: u32 = 2;
pub const DEFAULT_PARENT_LIFE_EXPECTANCY: u32 = 80;

/// Days left with one parent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentDays {
    /// The parent's age was not provided.
    Unknown,
    /// Estimate in days; `Known(0)` once the life expectancy is reached.
    Known(u32),
}

impl ParentDays {
    pub fn known(self) -> Option<u32> {
        match self {
            ParentDays::Known(days) => Some(days),
            ParentDays::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, ParentDays::Known(_))
    }

    pub fn days_or_zero(self) -> u32 {
        self.known().unwrap_or(0)
    }
}

/// "See your folks" estimate: remaining visits until the expected lifespan.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ParentTimeStats {
    pub father_age: Option<u32>,
    pub mother_age: Option<u32>,
    pub visits_per_year: u32,
    pub days_per_visit: u32,
    pub parent_life_expectancy: u32,
}

impl Default for ParentTimeStats {
    fn default() -> Self {
        Self {
            father_age: None,
            mother_age: None,
            visits_per_year: DEFAULT_VISITS_PER_YEAR,
            days_per_visit: DEFAULT_DAYS_PER_VISIT,
            parent_life_expectancy: DEFAULT_PARENT_LIFE_EXPECTANCY,
        }
    }
}

impl ParentTimeStats {
    pub fn new(father_age: Option<u32>, mother_age: Option<u32>) -> Self {
        Self {
            father_age,
            mother_age,
            ..Self::default()
        }
    }

    pub fn with_visits(mut self, visits_per_year: u32, days_per_visit: u32) -> Self {
        self.visits_per_year = visits_per_year;
        self.days_per_visit = days_per_visit;
        self
    }

    pub fn with_life_expectancy(mut self, years: u32) -> Self {
        self.parent_life_expectancy = years;
        self
    }

    pub fn days_left_with_father(&self) -> ParentDays {
        self.days_left(self.father_age)
    }

    pub fn days_left_with_mother(&self) -> ParentDays {
        self.days_left(self.mother_age)
    }

    pub fn total_days_left(&self) -> u32 {
        self.days_left_with_father().days_or_zero() + self.days_left_with_mother().days_or_zero()
    }

    // An age of 0 is how the config file spells "not provided".
    fn days_left(&self, age: Option<u32>) -> ParentDays {
        match age {
            None | Some(0) => ParentDays::Unknown,
            Some(age) => {
                let years_left = self.parent_life_expectancy.saturating_sub(age);
                ParentDays::Known(
                    years_left
                        .saturating_mul(self.visits_per_year)
                        .saturating_mul(self.days_per_visit),
                )
            }
        }
    }
}
