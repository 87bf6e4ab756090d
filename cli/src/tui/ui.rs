use memento_core::{LifeGrid, ProgressBand, SummaryView, WeekCell, YearOverview};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::format::thousands;
use crate::tui::app::{DashboardApp, Tab};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    lived: Color,
    current: Color,
    heading: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    lived: Color::Green,
    current: Color::Yellow,
    heading: Color::Yellow,
};

fn band_color(band: ProgressBand) -> Color {
    match band {
        ProgressBand::Green => Color::Green,
        ProgressBand::Yellow => Color::Yellow,
        ProgressBand::Red => Color::Red,
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
}

fn metric(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(THEME.muted)),
        Span::styled(value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
}

fn gauge(title: &str, percentage: f64, band: ProgressBand) -> Gauge<'_> {
    Gauge::default()
        .block(panel(title))
        .gauge_style(Style::default().fg(band_color(band)))
        .ratio((percentage / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", percentage))
}

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .block(panel(" MEMENTO MORI "));
    frame.render_widget(tabs, main_layout[0]);

    match app.tab {
        Tab::Summary => draw_summary(frame, &app.summary, main_layout[1]),
        Tab::Year => draw_year(frame, &app.year, app.scroll, main_layout[1]),
        Tab::Grid => draw_grid(frame, &app.grid, app.scroll, main_layout[1]),
    }

    let help = Line::from(vec![
        Span::styled("TABS: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("SCROLL: ", Style::default().fg(THEME.muted)),
        Span::styled("j/k ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_layout[2]);
}

fn draw_summary(frame: &mut Frame, view: &SummaryView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    frame.render_widget(
        gauge(" Life Progress ", view.life.percentage_lived, view.life.progress_band),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Length(1), Constraint::Percentage(45)])
        .split(chunks[1]);

    let life = &view.life;
    let free = &view.free_time;
    let work = &view.work;
    let left = vec![
        metric("Weeks lived", thousands(life.weeks_lived)),
        metric("Weeks remaining", thousands(life.weeks_remaining)),
        metric("Current age", format!("{:.1} years", life.age_years)),
        metric("Years remaining", format!("{:.1} years", life.years_remaining)),
        Line::from(""),
        heading("Truly free time"),
        metric("Free weeks lived", thousands(free.free_weeks_lived)),
        metric("Free weeks remaining", thousands(free.free_weeks_remaining)),
        metric("Free share of a day", format!("{:.1}%", free.free_time_percentage)),
        Line::from(""),
        heading("Working life"),
        metric("Until retirement", format!("{:.1} years", work.years_until_retirement)),
        metric("Weeks until retirement", thousands(work.weeks_until_retirement)),
        metric("Vacation weeks left", format!("~{}", work.vacation_weeks_remaining)),
    ];
    frame.render_widget(Paragraph::new(left).block(panel(" Life ")), columns[0]);

    let mut right = Vec::new();
    if let Some(family) = &view.family {
        right.push(heading("Family time"));
        if let Some(days) = family.days_with_father {
            right.push(metric("Days with father", format!("~{}", days)));
        }
        if let Some(days) = family.days_with_mother {
            right.push(metric("Days with mother", format!("~{}", days)));
        }
        right.push(Line::from(""));
    }
    right.push(heading("Weekends left"));
    right.push(metric("Weekends", thousands(view.weekends.weekends_remaining)));
    right.push(metric("Weekend days", thousands(view.weekends.weekend_days_remaining)));
    right.push(Line::from(""));
    right.push(Line::from(Span::styled(
        view.wisdom.clone(),
        Style::default().fg(THEME.lived).add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(
        Paragraph::new(right).block(panel(" Perspective ")).wrap(Wrap { trim: true }),
        columns[2],
    );
}

fn draw_year(frame: &mut Frame, overview: &YearOverview, scroll: u16, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let title = format!(" {} Progress ", overview.year);
    frame.render_widget(
        gauge(&title, overview.progress_percentage, overview.progress_band),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Length(1), Constraint::Percentage(45)])
        .split(chunks[1]);

    let left = vec![
        metric("Today", overview.today.format("%B %d, %Y").to_string()),
        metric("Days remaining", thousands(overview.days_remaining)),
        metric("Weeks remaining", format!("{:.1}", overview.weeks_remaining)),
        metric("Months remaining", overview.months_remaining.to_string()),
        Line::from(Span::styled(
            overview.remaining_months.join(", "),
            Style::default().fg(THEME.muted),
        )),
        Line::from(""),
        metric("Weekends remaining", overview.weekends.len().to_string()),
        metric("Weekend days", overview.weekend_days.to_string()),
        metric("Truly free days", format!("~{}", overview.free_weekend_days)),
        Line::from(""),
        heading("Family time planning"),
        metric(
            "Suggested gatherings",
            format!("{}-{}", overview.suggested_gatherings, overview.suggested_gatherings + 1),
        ),
    ];
    frame.render_widget(
        Paragraph::new(left).block(panel(" This Year ")).wrap(Wrap { trim: true }),
        columns[0],
    );

    let mut weekends = Vec::new();
    for group in &overview.weekends_by_month {
        weekends.push(Line::from(Span::styled(
            format!("{}:", group.month),
            Style::default().fg(THEME.heading).add_modifier(Modifier::BOLD),
        )));
        for weekend in &group.weekends {
            weekends.push(Line::from(format!(
                "  • {}-{}",
                weekend.saturday.format("%b %d"),
                weekend.sunday.format("%d")
            )));
        }
        weekends.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(weekends)
            .block(panel(" Upcoming Weekends "))
            .scroll((scroll, 0)),
        columns[2],
    );
}

fn grid_line(year: u32, decade_marker: bool, cells: &[WeekCell]) -> Line<'static> {
    let label_style = if decade_marker {
        Style::default().fg(THEME.heading).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(THEME.muted)
    };
    let mut spans = vec![Span::styled(format!("{:>3} ", year), label_style)];
    spans.extend(cells.iter().map(|cell| match cell {
        WeekCell::Lived => Span::styled("█", Style::default().fg(THEME.lived)),
        WeekCell::Current => Span::styled(
            "█",
            Style::default().fg(THEME.current).add_modifier(Modifier::BOLD),
        ),
        WeekCell::Remaining => Span::styled("□", Style::default().fg(THEME.muted)),
        WeekCell::Beyond => Span::styled("·", Style::default().fg(Color::Red)),
    }));
    Line::from(spans)
}

fn draw_grid(frame: &mut Frame, grid: &LifeGrid, scroll: u16, area: Rect) {
    let lines: Vec<Line> = grid
        .rows
        .iter()
        .map(|row| grid_line(row.year, row.decade_marker, &row.cells))
        .collect();

    let title = format!(
        " Life in Weeks: {} lived, {} remaining ",
        thousands(grid.weeks_lived),
        thousands(grid.weeks_remaining)
    );
    frame.render_widget(
        Paragraph::new(lines).block(panel(&title)).scroll((scroll, 0)),
        area,
    );
}
