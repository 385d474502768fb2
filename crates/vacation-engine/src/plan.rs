//! End-to-end pipeline for a single year.

use serde::Serialize;

use crate::blocks::{compute_free_blocks, FreeBlock};
use crate::error::Result;
use crate::holidays::{compute_public_holidays, HolidayMap};
use crate::opportunity::{compute_opportunities, Opportunity, OpportunityPolicy};

/// Everything computed for one year: holidays, free blocks and ranked suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct YearPlan {
    pub year: i32,
    pub holidays: HolidayMap,
    pub free_blocks: Vec<FreeBlock>,
    pub opportunities: Vec<Opportunity>,
}

/// Run holidays → free blocks → opportunities for `year`.
///
/// Each call allocates its own data, so plans for different years can be
/// computed in parallel.
///
/// # Errors
/// Returns `EngineError::InvalidYear` when `year` is outside the supported range.
pub fn plan_year(year: i32, policy: &OpportunityPolicy) -> Result<YearPlan> {
    let holidays = compute_public_holidays(year)?;
    let free_blocks = compute_free_blocks(year, &holidays)?;
    let opportunities = compute_opportunities(year, &free_blocks, &holidays, policy)?;

    tracing::debug!(
        year,
        holidays = holidays.len(),
        free_blocks = free_blocks.len(),
        opportunities = opportunities.len(),
        "planned year"
    );

    Ok(YearPlan {
        year,
        holidays,
        free_blocks,
        opportunities,
    })
}
