//! Date helpers for the offer header.
//!
//! The browser supplies "today" (see the frontend's `date_utils`), so nothing
//! here reads a clock.

use chrono::NaiveDate;

/// `YYYY-MM-DD`, zero padded, as expected by `<input type="date">`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Value to put into an empty date field, `None` when it already has one.
pub fn default_date(current: &str, today: NaiveDate) -> Option<String> {
    if current.trim().is_empty() {
        Some(format_iso_date(today))
    } else {
        None
    }
}

/// Display format used on the offer summary: `2024-03-05` -> `05/03/2024`.
pub fn format_display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_iso_date_is_zero_padded() {
        assert_eq!(format_iso_date(ymd(2024, 3, 5)), "2024-03-05");
        assert_eq!(format_iso_date(ymd(2024, 12, 31)), "2024-12-31");
    }

    #[test]
    fn test_default_date_only_when_empty() {
        assert_eq!(default_date("", ymd(2025, 1, 9)).as_deref(), Some("2025-01-09"));
        assert_eq!(default_date("  ", ymd(2025, 1, 9)).as_deref(), Some("2025-01-09"));
        assert_eq!(default_date("2024-06-01", ymd(2025, 1, 9)), None);
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-03-05"), "05/03/2024");
        assert_eq!(format_display_date("invalid"), "invalid");
    }
}
