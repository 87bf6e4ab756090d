use memento_core::SummaryView;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Color, Modify, Style};

use crate::format::{
    paint, progress_bar, thousands, BOLD, BOLD_CYAN, DIM, ITALIC_DIM_GREEN, WHITE, YELLOW,
};
use crate::panel::render_panel;

const PROGRESS_WIDTH: usize = 50;

pub fn render_summary(view: &SummaryView) -> String {
    let life = &view.life;

    let mut builder = Builder::default();
    builder.push_record(["📅 Weeks Lived".to_string(), thousands(life.weeks_lived)]);
    builder.push_record(["⏰ Weeks Remaining".to_string(), thousands(life.weeks_remaining)]);
    builder.push_record(["📊 Percentage Lived".to_string(), format!("{:.1}%", life.percentage_lived)]);
    builder.push_record(["🎂 Current Age".to_string(), format!("{:.1} years", life.age_years)]);
    builder.push_record(["🌅 Years Remaining".to_string(), format!("{:.1} years", life.years_remaining)]);

    let mut table = builder.build();
    table
        .with(Style::blank())
        .with(Modify::new(Columns::first()).with(Color::FG_CYAN));

    let mut body = vec![
        paint("Remember you will die. Remember you will live.", DIM),
        String::new(),
        table.to_string(),
        String::new(),
        paint("Life Progress: ", BOLD),
        progress_bar(life.percentage_lived, PROGRESS_WIDTH, life.progress_band),
        String::new(),
    ];

    let free = &view.free_time;
    body.push(paint("💼 TRULY FREE TIME (sleep/work removed)", BOLD_CYAN));
    body.push(paint(
        &format!(
            "   Free weeks lived: {} | Remaining: {}",
            thousands(free.free_weeks_lived),
            thousands(free.free_weeks_remaining)
        ),
        WHITE,
    ));
    body.push(paint(
        &format!("   Only {:.1}% of each day is truly yours", free.free_time_percentage),
        DIM,
    ));
    body.push(String::new());

    let work = &view.work;
    body.push(paint("🏢 WORKING LIFE", BOLD_CYAN));
    body.push(paint(
        &format!(
            "   Years until retirement: {:.1} ({} weeks)",
            work.years_until_retirement,
            thousands(work.weeks_until_retirement)
        ),
        WHITE,
    ));
    body.push(paint(
        &format!("   Vacation weeks remaining: ~{} weeks", work.vacation_weeks_remaining),
        WHITE,
    ));
    body.push(paint(
        &format!(
            "   Working years behind you: {:.1} of {:.0}",
            work.years_worked, work.working_years_total
        ),
        DIM,
    ));

    if let Some(family) = &view.family {
        body.push(String::new());
        body.push(paint("👪 FAMILY TIME", BOLD_CYAN));
        if let Some(days) = family.days_with_father {
            body.push(paint(&format!("   Days left with father: ~{} days", thousands(days.into())), WHITE));
        }
        if let Some(days) = family.days_with_mother {
            body.push(paint(&format!("   Days left with mother: ~{} days", thousands(days.into())), WHITE));
        }
        body.push(paint("   90% of lifetime with them: Already spent", YELLOW));
    }

    body.push(String::new());
    body.push(paint("🌅 WEEKENDS LEFT", BOLD_CYAN));
    body.push(paint(
        &format!(
            "   Saturday/Sunday freedom: ~{} weekends",
            thousands(view.weekends.weekends_remaining)
        ),
        WHITE,
    ));
    body.push(String::new());
    body.push(paint(&view.wisdom, ITALIC_DIM_GREEN));

    render_panel("MEMENTO MORI - THE REAL TIME", &body)
}

/// Short plain-text form for notifications and status bars.
pub fn render_notification(view: &SummaryView) -> String {
    let mut lines = vec![
        format!(
            "⏳ Weeks lived: {} | Remaining: {}",
            thousands(view.life.weeks_lived),
            thousands(view.life.weeks_remaining)
        ),
        format!("💫 {:.1}% of your expected life has passed", view.life.percentage_lived),
    ];
    if let Some(family) = &view.family {
        lines.push(format!("👪 ~{} days left with parents", family.total_days));
    }
    lines.push("⚡ Make today count.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use memento_core::{build_summary, calculate_all_stats, StatsParams};

    fn view(father_age: Option<u32>) -> SummaryView {
        let params = StatsParams {
            father_age,
            ..StatsParams::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        build_summary(&calculate_all_stats(&params, today))
    }

    #[test]
    fn test_notification_without_parents() {
        let text = render_notification(&view(None));

        assert_eq!(
            text,
            "⏳ Weeks lived: 1,774 | Remaining: 2,386\n\
             💫 42.6% of your expected life has passed\n\
             ⚡ Make today count."
        );
    }

    #[test]
    fn test_notification_with_parents() {
        let text = render_notification(&view(Some(60)));
        assert!(text.contains("👪 ~400 days left with parents"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_summary_panel_sections() {
        let panel = render_summary(&view(Some(60)));

        assert!(panel.contains("MEMENTO MORI"));
        assert!(panel.contains("1,774"));
        assert!(panel.contains("Days left with father: ~400 days"));
        assert!(!panel.contains("Days left with mother"));
        assert!(panel.contains("WEEKENDS LEFT"));
    }

    #[test]
    fn test_summary_omits_family_without_ages() {
        let panel = render_summary(&view(None));
        assert!(!panel.contains("FAMILY TIME"));
    }
}
