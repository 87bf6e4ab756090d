use anyhow::Result;
use chrono::NaiveDate;

use crate::model::life::LifeStats;
use crate::repository::ConfigRepository;
use crate::service::dto::{GridRow, LifeGrid, WeekCell};
use crate::service::stats_service::StatsService;

pub const WEEKS_PER_ROW: u32 = 52;

fn classify(week_number: i64, weeks_lived: i64, total_weeks: i64) -> WeekCell {
    if week_number < weeks_lived {
        WeekCell::Lived
    } else if week_number == weeks_lived {
        WeekCell::Current
    } else if week_number < total_weeks {
        WeekCell::Remaining
    } else {
        WeekCell::Beyond
    }
}

/// One row per year of the expected lifespan, plus whatever extra rows are
/// needed to reach the current week once the lifespan has been outlived.
pub fn build_life_grid(life: &LifeStats) -> LifeGrid {
    let weeks_lived = life.weeks_lived();
    let total_weeks = life.total_weeks();

    let years_to_current = if weeks_lived >= 0 {
        u32::try_from(weeks_lived / i64::from(WEEKS_PER_ROW) + 1).unwrap_or(u32::MAX)
    } else {
        0
    };
    let row_count = life.expected_lifespan.max(years_to_current);

    let rows = (0..row_count)
        .map(|year| {
            let cells = (0..WEEKS_PER_ROW)
                .map(|week| {
                    let week_number =
                        i64::from(year) * i64::from(WEEKS_PER_ROW) + i64::from(week);
                    classify(week_number, weeks_lived, total_weeks)
                })
                .collect();
            GridRow {
                year,
                decade_marker: year % 10 == 0,
                cells,
            }
        })
        .collect();

    LifeGrid {
        expected_lifespan: life.expected_lifespan,
        total_weeks,
        weeks_lived,
        weeks_remaining: life.weeks_remaining(),
        percentage_lived: life.percentage_lived(),
        rows,
    }
}

pub struct LifeGridUseCase<'a, R: ConfigRepository> {
    stats_service: &'a StatsService<R>,
}

impl<'a, R: ConfigRepository> LifeGridUseCase<'a, R> {
    pub fn new(stats_service: &'a StatsService<R>) -> Self {
        Self { stats_service }
    }

    pub fn get_grid(&self, today: NaiveDate) -> Result<LifeGrid> {
        let stats = self.stats_service.get_stats(today)?;
        Ok(build_life_grid(&stats.life))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn life(birth: (i32, u32, u32), lifespan: u32) -> LifeStats {
        LifeStats::new(
            NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .with_expected_lifespan(lifespan)
    }

    fn count(grid: &LifeGrid, kind: WeekCell) -> usize {
        grid.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| **cell == kind)
            .count()
    }

    #[test]
    fn test_grid_shape_and_counts() {
        let grid = build_life_grid(&life((1990, 1, 1), 80));

        assert_eq!(grid.rows.len(), 80);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 52));
        assert_eq!(count(&grid, WeekCell::Lived), 1774);
        assert_eq!(count(&grid, WeekCell::Current), 1);
        assert_eq!(count(&grid, WeekCell::Remaining), 4160 - 1774 - 1);
        assert_eq!(count(&grid, WeekCell::Beyond), 0);
    }

    #[test]
    fn test_current_week_position() {
        let grid = build_life_grid(&life((1990, 1, 1), 80));

        // week 1774 = row 34, column 6
        assert_eq!(grid.rows[34].cells[6], WeekCell::Current);
        assert_eq!(grid.rows[34].cells[5], WeekCell::Lived);
        assert_eq!(grid.rows[34].cells[7], WeekCell::Remaining);
    }

    #[test]
    fn test_decade_markers() {
        let grid = build_life_grid(&life((1990, 1, 1), 80));
        let markers: Vec<u32> = grid.rows.iter().filter(|r| r.decade_marker).map(|r| r.year).collect();
        assert_eq!(markers, vec![0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn test_outlived_lifespan_extends_grid() {
        let grid = build_life_grid(&life((1930, 1, 1), 80));

        assert!(grid.rows.len() > 80);
        assert_eq!(count(&grid, WeekCell::Current), 1);
        assert_eq!(count(&grid, WeekCell::Remaining), 0);
        assert!(count(&grid, WeekCell::Beyond) > 0);
        assert_eq!(grid.weeks_remaining, 0);
    }
}
