use memento_core::{LifeGrid, SummaryView, YearOverview};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summary,
    Year,
    Grid,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Summary, Tab::Year, Tab::Grid];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Year => "Year",
            Tab::Grid => "Grid",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

pub struct DashboardApp {
    pub tab: Tab,
    pub summary: SummaryView,
    pub year: YearOverview,
    pub grid: LifeGrid,
    pub scroll: u16,
}

impl DashboardApp {
    pub fn new(summary: SummaryView, year: YearOverview, grid: LifeGrid) -> Self {
        Self {
            tab: Tab::Summary,
            summary,
            year,
            grid,
            scroll: 0,
        }
    }

    pub fn next_tab(&mut self) {
        let i = (self.tab.index() + 1) % Tab::ALL.len();
        self.select_tab(Tab::ALL[i]);
    }

    pub fn previous_tab(&mut self) {
        let i = (self.tab.index() + Tab::ALL.len() - 1) % Tab::ALL.len();
        self.select_tab(Tab::ALL[i]);
    }

    fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    // Line count of the scrollable body on the current tab.
    fn max_scroll(&self) -> u16 {
        let lines = match self.tab {
            Tab::Summary => 0,
            Tab::Year => self.year.weekends.len() + self.year.weekends_by_month.len() * 2,
            Tab::Grid => self.grid.rows.len(),
        };
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use memento_core::{
        build_life_grid, build_summary, build_year_overview, calculate_all_stats, StatsParams,
        YearStats,
    };

    fn app() -> DashboardApp {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let stats = calculate_all_stats(&StatsParams::default(), today);
        DashboardApp::new(
            build_summary(&stats),
            build_year_overview(&YearStats::new(today), stats.free_time.free_time_percentage()),
            build_life_grid(&stats.life),
        )
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        assert_eq!(app.tab, Tab::Summary);

        app.next_tab();
        assert_eq!(app.tab, Tab::Year);
        app.next_tab();
        assert_eq!(app.tab, Tab::Grid);
        app.next_tab();
        assert_eq!(app.tab, Tab::Summary);

        app.previous_tab();
        assert_eq!(app.tab, Tab::Grid);
    }

    #[test]
    fn test_scroll_is_bounded_and_resets() {
        let mut app = app();
        app.scroll_down();
        assert_eq!(app.scroll, 0);

        app.select_tab(Tab::Grid);
        for _ in 0..200 {
            app.scroll_down();
        }
        assert_eq!(app.scroll, 80);

        app.scroll_up();
        assert_eq!(app.scroll, 79);

        app.next_tab();
        assert_eq!(app.scroll, 0);
    }
}
