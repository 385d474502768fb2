//! Calendar arithmetic on plain Gregorian dates.
//!
//! All dates are [`chrono::NaiveDate`] values: no timezone is attached, so day
//! arithmetic can never be shifted by a daylight-saving transition.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineError, Result};
use crate::holidays::HolidayMap;

/// Earliest year accepted by the engine entry points.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted by the engine entry points.
pub const MAX_YEAR: i32 = 2300;

/// Reject years outside `MIN_YEAR..=MAX_YEAR`.
pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(EngineError::InvalidYear {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        })
    }
}

/// Construct a date, mapping an impossible (year, month, day) to an error.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        EngineError::DateOutOfRange(format!("{:04}-{:02}-{:02}", year, month, day))
    })
}

/// Return the date `days` days after `date` (`days` may be negative).
///
/// Month and year rollover is handled by chrono. Panics only if the result
/// leaves chrono's representable range, which no year in `MIN_YEAR..=MAX_YEAR`
/// can reach.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Canonical `YYYY-MM-DD` key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` key back into a date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A weekend day or a public holiday.
pub fn is_non_working(date: NaiveDate, holidays: &HolidayMap) -> bool {
    is_weekend(date) || holidays.contains(date)
}

pub fn is_workday(date: NaiveDate, holidays: &HolidayMap) -> bool {
    !is_non_working(date, holidays)
}

/// Every date from January 1 to December 31 of `year`, in order.
///
/// The iterator is `Clone`, so a caller that needs a second pass clones it
/// before consuming. Yields nothing for a year chrono cannot represent.
pub fn all_days_in_year(year: i32) -> impl Iterator<Item = NaiveDate> + Clone {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |d| d.year() == year)
}

/// Inclusive length of the range `start..=end` in days.
pub(crate) fn span_days(start: NaiveDate, end: NaiveDate) -> u32 {
    ((end - start).num_days() + 1).max(0) as u32
}
