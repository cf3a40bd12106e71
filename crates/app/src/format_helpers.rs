//! Display formatting for dates, counts and greetings.
//!
//! Backend timestamps arrive as local ISO-8601 strings without an offset
//! (`2026-04-01T10:30:00`); anything unparseable is shown as-is.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s.get(..10).unwrap_or(s), "%Y-%m-%d").ok()
}

/// "Apr 1, 2026".
pub fn format_date_human(s: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => s.to_string(),
    }
}

/// "Apr 1, 2026 10:30 AM". Date-only input keeps the date.
pub fn format_datetime_human(s: &str) -> String {
    match parse_datetime(s) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => format_date_human(s),
    }
}

/// "10:30 AM", empty when there is no time part.
pub fn format_time(s: &str) -> String {
    parse_datetime(s)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Thousands separators: 1284 → "1,284".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Salutation for the hour of day.
pub fn greeting(now: NaiveDateTime) -> &'static str {
    match now.hour() {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// "34 yrs", or an em dash placeholder when the age is unknown.
pub fn age_label(age: Option<u32>) -> String {
    match age {
        Some(a) => format!("{a} yrs"),
        None => "\u{2014}".to_string(),
    }
}

pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dates_format_human() {
        assert_eq!(format_date_human("2026-04-01T10:30:00"), "Apr 1, 2026");
        assert_eq!(format_date_human("1990-12-25"), "Dec 25, 1990");
        assert_eq!(format_date_human("soon"), "soon");
    }

    #[test]
    fn datetimes_format_with_twelve_hour_clock() {
        assert_eq!(format_datetime_human("2026-04-01T14:05:00"), "Apr 1, 2026 2:05 PM");
        assert_eq!(format_datetime_human("2026-04-01T00:15"), "Apr 1, 2026 12:15 AM");
        assert_eq!(format_datetime_human("2026-04-01"), "Apr 1, 2026");
        assert_eq!(format_time("2026-04-01T09:00:00.000"), "9:00 AM");
        assert_eq!(format_time("2026-04-01"), "");
    }

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1284), "1,284");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn greeting_follows_the_clock() {
        let at = |h| NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
        assert_eq!(greeting(at(8)), "Good morning");
        assert_eq!(greeting(at(13)), "Good afternoon");
        assert_eq!(greeting(at(22)), "Good evening");
    }

    #[test]
    fn age_label_handles_unknown() {
        assert_eq!(age_label(Some(34)), "34 yrs");
        assert_eq!(age_label(None), "\u{2014}");
    }
}
