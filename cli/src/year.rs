use memento_core::YearOverview;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Color, Modify, Style};

use crate::format::{
    paint, progress_bar, thousands, BOLD, BOLD_CYAN, BOLD_YELLOW, DIM, GREEN, ITALIC_DIM_GREEN,
    WHITE,
};
use crate::panel::render_panel;

const PROGRESS_WIDTH: usize = 50;

pub fn render_year(overview: &YearOverview) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "📅 Today".to_string(),
        overview.today.format("%B %d, %Y").to_string(),
    ]);
    builder.push_record(["⏰ Days Remaining".to_string(), thousands(overview.days_remaining)]);
    builder.push_record([
        "📊 Weeks Remaining".to_string(),
        format!("{:.1}", overview.weeks_remaining),
    ]);
    builder.push_record([
        "📆 Months Remaining".to_string(),
        overview.months_remaining.to_string(),
    ]);
    if !overview.remaining_months.is_empty() {
        builder.push_record([String::new(), overview.remaining_months.join(", ")]);
    }
    builder.push_record([
        "🌅 Weekends Remaining".to_string(),
        format!("{} weekends", overview.weekends.len()),
    ]);
    builder.push_record([String::new(), format!("{} weekend days", overview.weekend_days)]);
    builder.push_record([
        "💡 Realistic Free Time".to_string(),
        format!("~{} truly free weekend days", overview.free_weekend_days),
    ]);

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::first()).with(Color::FG_CYAN));

    let mut body = vec![
        paint("Year Progress: ", BOLD),
        progress_bar(overview.progress_percentage, PROGRESS_WIDTH, overview.progress_band),
        String::new(),
        table.to_string(),
        String::new(),
        paint("📌 UPCOMING WEEKENDS", BOLD_CYAN),
    ];

    for group in &overview.weekends_by_month {
        body.push(String::new());
        body.push(paint(&format!("{}:", group.month), BOLD_YELLOW));
        for weekend in &group.weekends {
            body.push(paint(
                &format!(
                    "  • {}-{}",
                    weekend.saturday.format("%b %d"),
                    weekend.sunday.format("%d")
                ),
                WHITE,
            ));
        }
    }
    if overview.weekends.is_empty() {
        body.push(paint("  No full weekends left this year", DIM));
    }

    body.push(String::new());
    body.push(paint("💭 FAMILY TIME PLANNING", BOLD_CYAN));
    body.push(paint(
        &format!("  • Available: {} weekend days total", overview.weekend_days),
        WHITE,
    ));
    body.push(paint(
        &format!(
            "  • Realistic after obligations: ~{} days",
            overview.free_weekend_days
        ),
        WHITE,
    ));
    body.push(paint(
        &format!(
            "  • Suggested gatherings: {}-{} family/friend events",
            overview.suggested_gatherings,
            overview.suggested_gatherings + 1
        ),
        GREEN,
    ));
    body.push(paint("  • Time per event: Plan for 1-2 days each", DIM));
    body.push(String::new());
    body.push(paint(
        "Make the most of your remaining weekends! Time with loved ones is precious.",
        ITALIC_DIM_GREEN,
    ));

    render_panel(&format!("YOUR {} YEAR OVERVIEW", overview.year), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use memento_core::{build_year_overview, YearStats};

    fn overview(y: i32, m: u32, d: u32) -> YearOverview {
        let year = YearStats::new(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        build_year_overview(&year, 20.4)
    }

    #[test]
    fn test_weekend_listing() {
        let out = render_year(&overview(2024, 11, 20));

        assert!(out.contains("YOUR 2024 YEAR OVERVIEW"));
        assert!(out.contains("November:"));
        assert!(out.contains("Nov 23-24"));
        assert!(out.contains("Dec 28-29"));
        assert!(out.contains("6 weekends"));
        assert!(out.contains("Suggested gatherings: 2-3"));
    }

    #[test]
    fn test_no_weekends_left() {
        let out = render_year(&overview(2022, 12, 31));
        assert!(out.contains("No full weekends left this year"));
        assert!(out.contains("0 weekends"));
    }
}
