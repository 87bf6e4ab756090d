use memento_core::{LifeGrid, WeekCell};

use crate::format::{
    paint, thousands, BOLD, BOLD_CYAN, BOLD_YELLOW, DIM, DIM_RED, DIM_WHITE, GREEN,
    ITALIC_DIM_GREEN, YELLOW,
};
use crate::panel::render_panel;

fn cell_glyph(cell: WeekCell) -> (&'static str, &'static str) {
    match cell {
        WeekCell::Lived => ("█", GREEN),
        WeekCell::Current => ("█", BOLD_YELLOW),
        WeekCell::Remaining => ("□", DIM_WHITE),
        WeekCell::Beyond => ("·", DIM_RED),
    }
}

/// Wait-But-Why style grid: one row per year, one box per week.
pub fn render_grid(grid: &LifeGrid) -> String {
    let mut body = vec![paint(
        &format!(
            "Each box is one week. {} years = {} weeks total",
            grid.expected_lifespan,
            thousands(grid.total_weeks)
        ),
        DIM,
    )];
    body.push(String::new());

    for row in &grid.rows {
        let label_style = if row.decade_marker { BOLD_YELLOW } else { DIM };
        let mut line = paint(&format!("{:>2} ", row.year), label_style);
        // Runs of equal cells share one colour sequence.
        let mut run_start = 0;
        while run_start < row.cells.len() {
            let cell = row.cells[run_start];
            let run_len = row.cells[run_start..]
                .iter()
                .take_while(|c| **c == cell)
                .count();
            let (glyph, style) = cell_glyph(cell);
            line.push_str(&paint(&glyph.repeat(run_len), style));
            run_start += run_len;
        }
        body.push(line);
    }

    body.push(String::new());
    let legend = [
        paint("Legend: ", BOLD),
        paint("█ ", GREEN),
        "Week lived  ".to_string(),
        paint("█ ", BOLD_YELLOW),
        "Current week  ".to_string(),
        paint("□ ", DIM_WHITE),
        "Week remaining  ".to_string(),
        paint("· ", DIM_RED),
        "Beyond expected lifespan".to_string(),
    ];
    body.push(legend.concat());

    body.push(String::new());
    body.push(format!(
        "{}{} • {} weeks remaining • {}",
        paint("📊 Stats: ", BOLD_CYAN),
        paint(&format!("{} weeks lived", thousands(grid.weeks_lived)), GREEN),
        thousands(grid.weeks_remaining),
        paint(&format!("{:.1}% complete", grid.percentage_lived), YELLOW),
    ));
    body.push(String::new());
    body.push(paint("Every week counts. Make them meaningful.", ITALIC_DIM_GREEN));

    render_panel("YOUR LIFE IN WEEKS", &body)
}
