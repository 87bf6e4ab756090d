use tabled::builder::Builder;
use tabled::grid::util::string::get_line_width;
use tabled::settings::object::Rows;
use tabled::settings::style::LineText;
use tabled::settings::{Alignment, Padding, Style, Width};

const PADDING: usize = 2;

/// Frames `body` in a rounded one-cell table with `title` set into the top
/// border. Body entries may themselves span several lines.
pub fn render_panel(title: &str, body: &[String]) -> String {
    let title = format!(" {} ", title);

    let mut builder = Builder::default();
    builder.push_record([body.join("\n")]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Padding::new(PADDING, PADDING, 1, 1))
        .with(Width::increase(get_line_width(&title) + 2 * PADDING))
        .with(LineText::new(title, Rows::first()).align(Alignment::center()));
    table.to_string()
}
