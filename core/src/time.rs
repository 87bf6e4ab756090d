use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The current date in the user's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_birthdate(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty birthdate string"));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| anyhow!("Could not parse birthdate '{}': {}", input, e))
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub fn year_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

pub fn year_end(date: NaiveDate) -> NaiveDate {
    year_start(date) + Duration::days(days_in_year(date.year()) - 1)
}

/// The Saturday on or after `date`. A Saturday maps to itself.
pub fn next_saturday(date: NaiveDate) -> NaiveDate {
    let saturday = Weekday::Sat.num_days_from_monday() as i64;
    let current = date.weekday().num_days_from_monday() as i64;
    date + Duration::days((saturday - current).rem_euclid(7))
}

/// Full English name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_birthdate() {
        assert_eq!(parse_birthdate("1990-01-01").unwrap(), date(1990, 1, 1));
        assert_eq!(parse_birthdate(" 2000-02-29 ").unwrap(), date(2000, 2, 29));
        assert!(parse_birthdate("").is_err());
        assert!(parse_birthdate("01/01/1990").is_err());
        assert!(parse_birthdate("1990-02-30").is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_start(date(2024, 7, 15)), date(2024, 1, 1));
        assert_eq!(year_end(date(2024, 7, 15)), date(2024, 12, 31));
        assert_eq!(year_start(date(2023, 1, 1)), date(2023, 1, 1));
        assert_eq!(year_end(date(2023, 12, 31)), date(2023, 12, 31));
    }

    #[test]
    fn test_next_saturday() {
        // 2024-01-01 is a Monday
        assert_eq!(next_saturday(date(2024, 1, 1)), date(2024, 1, 6));
        // Saturday stays put
        assert_eq!(next_saturday(date(2024, 1, 6)), date(2024, 1, 6));
        // Sunday rolls to the following Saturday
        assert_eq!(next_saturday(date(2024, 1, 7)), date(2024, 1, 13));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}
