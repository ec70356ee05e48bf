//! Stay length calculations.
//!
//! Night counts never fail and never drop below one.

use chrono::NaiveDate;

use crate::model::booking::DATE_FORMAT;

/// Number of nights between two `YYYY-MM-DD` dates, never less than one.
///
/// # Arguments
/// - `check_in` - Arrival date
/// - `check_out` - Departure date
///
/// # Returns
/// The whole-day difference between the dates, or `1` when the departure is on or before
/// the arrival or either date fails to parse.
///
/// # Example
/// ```ignore
/// assert_eq!(night_count("2025-08-10", "2025-08-15"), 5);
/// assert_eq!(night_count("2025-08-15", "2025-08-10"), 1);
/// ```
pub fn night_count(check_in: &str, check_out: &str) -> u32 {
    let parse = |value: &str| NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok();

    let (Some(check_in), Some(check_out)) = (parse(check_in), parse(check_out)) else {
        return 1;
    };

    let days = (check_out - check_in).num_days();

    u32::try_from(days).ok().filter(|&n| n > 0).unwrap_or(1)
}
