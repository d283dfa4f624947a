//! Date normalization for resume fields.
//!
//! Profile dates arrive in whatever shape the user typed (ISO dates, "March
//! 2020", bare years, already-canonical "03/2020"). Everything funnels into
//! the canonical `MM/YYYY` form; inputs that cannot be parsed pass through
//! unchanged so user data is never destroyed.

use chrono::{DateTime, Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}/\d{4}$").unwrap());
static YEAR_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Converts a heterogeneous date string into canonical `MM/YYYY` form.
/// Already-canonical input is returned as-is; unparseable input is returned
/// unchanged. Never fails.
pub fn normalize_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if MONTH_YEAR_RE.is_match(input) {
        return input.to_string();
    }
    match parse_month_year(input) {
        Some((month, year)) => format!("{month:02}/{year}"),
        None => input.to_string(),
    }
}

/// Extracts a comparable year from a date string, if one can be determined.
pub fn year_of(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if MONTH_YEAR_RE.is_match(trimmed) {
        return trimmed.split('/').nth(1)?.parse().ok();
    }
    parse_month_year(trimmed).map(|(_, year)| year)
}

fn parse_month_year(input: &str) -> Option<(u32, i32)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some((dt.month(), dt.year()));
    }

    for format in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some((date.month(), date.year()));
        }
    }

    // Month-year forms without a day: "2020-03", "March 2020", "Mar 2020".
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Some((date.month(), date.year()));
    }
    for format in ["%d %B %Y", "%d %b %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("01 {trimmed}"), format) {
            return Some((date.month(), date.year()));
        }
    }

    if YEAR_ONLY_RE.is_match(trimmed) {
        return trimmed.parse().ok().map(|year| (1, year));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_passes_through() {
        assert_eq!(normalize_date("03/2020"), "03/2020");
        assert_eq!(normalize_date("12/1999"), "12/1999");
    }

    #[test]
    fn test_iso_date_normalizes() {
        assert_eq!(normalize_date("2020-03-15"), "03/2020");
        assert_eq!(normalize_date("2018-01-01"), "01/2018");
    }

    #[test]
    fn test_month_name_normalizes() {
        assert_eq!(normalize_date("March 2020"), "03/2020");
        assert_eq!(normalize_date("Sep 2014"), "09/2014");
    }

    #[test]
    fn test_year_month_normalizes() {
        assert_eq!(normalize_date("2020-03"), "03/2020");
    }

    #[test]
    fn test_unparseable_input_returned_unchanged() {
        assert_eq!(normalize_date("not a date"), "not a date");
        assert_eq!(normalize_date("sometime in the 90s"), "sometime in the 90s");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_year_of_canonical() {
        assert_eq!(year_of("03/2020"), Some(2020));
    }

    #[test]
    fn test_year_of_general_forms() {
        assert_eq!(year_of("2020-03-15"), Some(2020));
        assert_eq!(year_of("March 2006"), Some(2006));
        assert_eq!(year_of("1998"), Some(1998));
    }

    #[test]
    fn test_year_of_unparseable_is_none() {
        assert_eq!(year_of("not a date"), None);
        assert_eq!(year_of(""), None);
        assert_eq!(year_of("   "), None);
    }
}
