use memento_core::ProgressBand;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC_DIM_GREEN: &str = "\x1b[3;2;32m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const WHITE: &str = "\x1b[37m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_WHITE: &str = "\x1b[1;37m";
pub const DIM_WHITE: &str = "\x1b[2;37m";
pub const DIM_RED: &str = "\x1b[2;31m";

pub fn paint(text: &str, style: &str) -> String {
    format!("{}{}{}", style, text, RESET)
}

pub fn band_style(band: ProgressBand) -> &'static str {
    match band {
        ProgressBand::Green => GREEN,
        ProgressBand::Yellow => YELLOW,
        ProgressBand::Red => RED,
    }
}

/// `1234567` -> `1,234,567`
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        out.insert(0, '-');
    }
    out
}

/// Number of filled cells for `percentage` of `width`, clamped to the bar.
pub fn filled_cells(percentage: f64, width: usize) -> usize {
    let filled = (percentage / 100.0 * width as f64) as i64;
    filled.clamp(0, width as i64) as usize
}

pub fn progress_bar(percentage: f64, width: usize, band: ProgressBand) -> String {
    let filled = filled_cells(percentage, width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!(
        "{} {}",
        paint(&bar, band_style(band)),
        paint(&format!("{:.1}%", percentage), BOLD_WHITE)
    )
}
