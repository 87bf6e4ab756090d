pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use memento_core::{
    build_life_grid, build_summary, build_year_overview, ConfigRepository, StatsService,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::tui::app::DashboardApp;

/// Runs `restore` when dropped, so every exit path after raw mode is
/// entered puts the terminal back.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "could not leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "could not leave the alternate screen");
    }
}

pub fn run<R: ConfigRepository>(service: &StatsService<R>, today: NaiveDate) -> Result<()> {
    // Load everything before entering raw mode
    let stats = service.get_stats(today)?;
    let summary = build_summary(&stats);
    let year = build_year_overview(
        &service.get_year_stats(today),
        stats.free_time.free_time_percentage(),
    );
    let grid = build_life_grid(&stats.life);
    let mut app = DashboardApp::new(summary, year, grid);

    enable_raw_mode()?;
    let _guard = RestoreGuard {
        restore: restore_terminal,
    };
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_app(&mut terminal, &mut app)
}
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut DashboardApp) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_tab(),
                        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.previous_tab(),
                        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;

    #[test]
    fn test_guard_restores_when_setup_fails() {
        let restored = Cell::new(0);
        let setup = || -> Result<()> {
            let _guard = RestoreGuard {
                restore: || restored.set(restored.get() + 1),
            };
            bail!("alternate screen unavailable");
        };

        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_success() {
        let restored = Cell::new(0);
        {
            let _guard = RestoreGuard {
                restore: || restored.set(restored.get() + 1),
            };
        }
        assert_eq!(restored.get(), 1);
    }
}
