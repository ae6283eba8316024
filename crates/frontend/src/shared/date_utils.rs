//! Utilities for dates in the browser
//!
//! Calendar arithmetic lives in `contracts::shared::date`; this module only
//! reads the local clock.

use chrono::NaiveDate;

/// Today's date in the browser's time zone.
pub fn today_local() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    date_from_parts(now.get_full_year(), now.get_month(), now.get_date())
}

/// `month0` is zero-based, as returned by `Date.getMonth()`.
fn date_from_parts(year: u32, month0: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month0 + 1, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_parts() {
        assert_eq!(
            date_from_parts(2024, 0, 31),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert_eq!(
            date_from_parts(2024, 11, 1),
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
    }

    #[test]
    fn test_invalid_parts() {
        assert!(date_from_parts(2024, 1, 30).is_none());
    }
}
