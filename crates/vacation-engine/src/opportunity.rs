//! Candidate generation for paid-leave suggestions.
//!
//! Two strategies feed the ranker:
//!
//! - **Bridge**: take every workday between two neighbouring free blocks so
//!   they merge into one.
//! - **Extension**: take a short run of consecutive workdays and absorb the
//!   free days on either side of it.
//!
//! Both strategies emit overlapping candidates freely; [`crate::rank`] removes
//! the duplicates.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::blocks::FreeBlock;
use crate::calendar::{
    add_days, all_days_in_year, date_key, is_non_working, is_workday, span_days, validate_year,
};
use crate::error::{EngineError, Result};
use crate::holidays::HolidayMap;
use crate::rank::rank_opportunities;

/// Tunable limits for opportunity generation and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpportunityPolicy {
    /// Longest run of leave days suggested as one chunk.
    pub max_chunk_size: u32,
    /// Number of ranked suggestions returned.
    pub top_n: usize,
    /// Drop candidates costing more leave days than this.
    pub leave_budget: Option<u32>,
}

impl Default for OpportunityPolicy {
    fn default() -> Self {
        Self {
            max_chunk_size: 4,
            top_n: 30,
            leave_budget: None,
        }
    }
}

impl OpportunityPolicy {
    /// Parse a policy from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidPolicy` if the document is malformed or
    /// names an unknown field.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidPolicy(e.to_string()))
    }
}

/// Which generation strategy produced an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    Bridge,
    Extension,
}

/// A suggested set of leave days and the continuous time off it yields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub kind: OpportunityKind,
    /// Leave days to book, in chronological order.
    pub vacation_days_to_take: Vec<NaiveDate>,
    pub cost_vacation_days: u32,
    pub resulting_start_date: NaiveDate,
    pub resulting_end_date: NaiveDate,
    pub total_days_off: u32,
    /// `total_days_off / cost_vacation_days`; infinite when nothing is spent.
    pub efficiency_score: f64,
}

impl Opportunity {
    pub fn new(
        kind: OpportunityKind,
        vacation_days_to_take: Vec<NaiveDate>,
        resulting_start_date: NaiveDate,
        resulting_end_date: NaiveDate,
    ) -> Self {
        let cost_vacation_days = vacation_days_to_take.len() as u32;
        let total_days_off = span_days(resulting_start_date, resulting_end_date);
        let efficiency_score = if cost_vacation_days > 0 {
            f64::from(total_days_off) / f64::from(cost_vacation_days)
        } else {
            f64::INFINITY
        };
        Self {
            kind,
            vacation_days_to_take,
            cost_vacation_days,
            resulting_start_date,
            resulting_end_date,
            total_days_off,
            efficiency_score,
        }
    }

    /// Identity used for deduplication: the leave days plus the resulting range.
    pub fn signature(&self) -> String {
        let days: Vec<String> = self
            .vacation_days_to_take
            .iter()
            .map(|d| date_key(*d))
            .collect();
        format!(
            "{}-{}-{}",
            days.join(","),
            date_key(self.resulting_start_date),
            date_key(self.resulting_end_date)
        )
    }

    /// Ranking order: more days off first, then fewer leave days.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .total_days_off
            .cmp(&self.total_days_off)
            .then(self.cost_vacation_days.cmp(&other.cost_vacation_days))
    }

    /// Strictly ahead of `other` in the ranking order.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

/// Bridge each pair of neighbouring free blocks whose gap costs between 1 and
/// `policy.max_chunk_size` workdays.
///
/// Holidays inside a gap are not counted as leave. The resulting range runs
/// from the first block's start to the second block's end.
pub fn bridge_gaps(
    blocks: &[FreeBlock],
    holidays: &HolidayMap,
    policy: &OpportunityPolicy,
) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    for pair in blocks.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        let gap_start = add_days(before.end, 1);
        let gap_end = add_days(after.start, -1);
        if gap_start > gap_end {
            continue;
        }

        let leave_days: Vec<NaiveDate> = gap_start
            .iter_days()
            .take_while(|d| *d <= gap_end)
            .filter(|d| is_workday(*d, holidays))
            .collect();

        let cost = leave_days.len() as u32;
        if cost == 0 || cost > policy.max_chunk_size {
            continue;
        }

        opportunities.push(Opportunity::new(
            OpportunityKind::Bridge,
            leave_days,
            before.start,
            after.end,
        ));
    }

    opportunities
}

/// For every workday and every chunk length up to `policy.max_chunk_size`,
/// take that many consecutive workdays and extend the range over the free
/// days on both sides, stopping at the year's edges.
///
/// # Errors
/// Returns `EngineError::InvalidYear` when `year` is outside the supported range.
pub fn extend_chunks(
    year: i32,
    holidays: &HolidayMap,
    policy: &OpportunityPolicy,
) -> Result<Vec<Opportunity>> {
    validate_year(year)?;

    let days: Vec<NaiveDate> = all_days_in_year(year).collect();
    let (Some(&first), Some(&last)) = (days.first(), days.last()) else {
        return Ok(Vec::new());
    };
    let max_chunk = policy.max_chunk_size as usize;

    let mut opportunities = Vec::new();
    for (i, &day) in days.iter().enumerate() {
        if !is_workday(day, holidays) {
            continue;
        }

        for len in 1..=max_chunk {
            let Some(chunk) = days.get(i..i + len) else {
                break;
            };
            // A longer chunk would contain the same non-workday.
            if !chunk.iter().all(|d| is_workday(*d, holidays)) {
                break;
            }

            let mut start = chunk[0];
            while start > first && is_non_working(add_days(start, -1), holidays) {
                start = add_days(start, -1);
            }
            let mut end = chunk[len - 1];
            while end < last && is_non_working(add_days(end, 1), holidays) {
                end = add_days(end, 1);
            }

            opportunities.push(Opportunity::new(
                OpportunityKind::Extension,
                chunk.to_vec(),
                start,
                end,
            ));
        }
    }

    Ok(opportunities)
}

/// Generate, deduplicate and rank the leave suggestions for `year`.
///
/// Returns at most `policy.top_n` opportunities, best first. An empty result
/// means nothing qualified and is not an error.
///
/// # Errors
/// Returns `EngineError::InvalidYear` when `year` is outside the supported range.
pub fn compute_opportunities(
    year: i32,
    blocks: &[FreeBlock],
    holidays: &HolidayMap,
    policy: &OpportunityPolicy,
) -> Result<Vec<Opportunity>> {
    validate_year(year)?;

    let mut candidates = bridge_gaps(blocks, holidays, policy);
    let bridged = candidates.len();
    candidates.extend(extend_chunks(year, holidays, policy)?);
    tracing::debug!(
        year,
        bridged,
        extended = candidates.len() - bridged,
        "generated opportunity candidates"
    );

    Ok(rank_opportunities(candidates, policy))
}
