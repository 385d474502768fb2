//! Group consecutive non-working days into free blocks.
//!
//! One chronological pass over the year. A block opens on the first weekend
//! day or holiday after a workday and closes on the day before the next
//! workday; a block still open on December 31 closes there.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, all_days_in_year, is_non_working, span_days, validate_year};
use crate::error::Result;
use crate::holidays::HolidayMap;

/// A maximal run of non-working days, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FreeBlock {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FreeBlock {
    pub fn len_days(&self) -> u32 {
        span_days(self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Scanner state: either between blocks or inside one that began at a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    Open(NaiveDate),
}

/// Find every free block in `year`, in chronological order.
///
/// Blocks never overlap and together cover exactly the weekend days and
/// holidays of the year.
///
/// # Errors
/// Returns `EngineError::InvalidYear` when `year` is outside the supported range.
pub fn compute_free_blocks(year: i32, holidays: &HolidayMap) -> Result<Vec<FreeBlock>> {
    validate_year(year)?;

    let mut blocks = Vec::new();
    let mut state = ScanState::Idle;
    let mut last_day = None;

    for day in all_days_in_year(year) {
        let free = is_non_working(day, holidays);
        state = match (state, free) {
            (ScanState::Idle, true) => ScanState::Open(day),
            (ScanState::Open(start), false) => {
                blocks.push(FreeBlock {
                    start,
                    end: add_days(day, -1),
                });
                ScanState::Idle
            }
            (unchanged, _) => unchanged,
        };
        last_day = Some(day);
    }

    // Trailing block running into December 31.
    if let (ScanState::Open(start), Some(end)) = (state, last_day) {
        blocks.push(FreeBlock { start, end });
    }

    tracing::debug!(year, blocks = blocks.len(), "computed free blocks");
    Ok(blocks)
}
