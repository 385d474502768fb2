//! Orthodox Easter and the public holidays that move with it.
//!
//! Easter Sunday is found with the closed-form Julian computation, then shifted
//! by a fixed 13 days into the Gregorian calendar. The dependent feasts sit at
//! fixed offsets from that Sunday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, ymd};
use crate::error::Result;

/// Days between the Julian and Gregorian calendars applied to the Easter date.
const JULIAN_TO_GREGORIAN_DAYS: i64 = 13;

/// A holiday defined relative to Orthodox Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovableFeast {
    CleanMonday,
    GoodFriday,
    EasterMonday,
    WhitMonday,
}

impl MovableFeast {
    /// All feasts, in the order they are merged into a holiday map.
    pub const ALL: [MovableFeast; 4] = [
        MovableFeast::CleanMonday,
        MovableFeast::GoodFriday,
        MovableFeast::EasterMonday,
        MovableFeast::WhitMonday,
    ];

    /// Signed distance from Easter Sunday in days.
    pub fn offset_days(self) -> i64 {
        match self {
            MovableFeast::CleanMonday => -48,
            MovableFeast::GoodFriday => -2,
            MovableFeast::EasterMonday => 1,
            MovableFeast::WhitMonday => 50,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MovableFeast::CleanMonday => "Clean Monday",
            MovableFeast::GoodFriday => "Orthodox Good Friday",
            MovableFeast::EasterMonday => "Orthodox Easter Monday",
            MovableFeast::WhitMonday => "Orthodox Whit Monday (Kataklysmos)",
        }
    }
}

/// Orthodox Easter Sunday for `year`, expressed as a Gregorian date.
///
/// # Errors
/// Returns `EngineError::DateOutOfRange` if `year` is outside chrono's range.
pub fn orthodox_easter(year: i32) -> Result<NaiveDate> {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    // Julian Easter always lands in March or April, so (month, day) is valid.
    let julian = ymd(year, month as u32, day as u32)?;
    Ok(add_days(julian, JULIAN_TO_GREGORIAN_DAYS))
}

/// Derive every movable feast from an Easter Sunday `anchor`.
///
/// Each date keeps the year it lands in: an anchor early enough in January
/// puts Clean Monday in the previous year, and no clamping is applied.
pub fn movable_feasts_from(anchor: NaiveDate) -> Vec<(NaiveDate, MovableFeast)> {
    MovableFeast::ALL
        .iter()
        .map(|&feast| (add_days(anchor, feast.offset_days()), feast))
        .collect()
}

/// Movable feasts for `year`, computing Easter once.
pub fn movable_feasts(year: i32) -> Result<Vec<(NaiveDate, MovableFeast)>> {
    let easter = orthodox_easter(year)?;
    Ok(movable_feasts_from(easter))
}
