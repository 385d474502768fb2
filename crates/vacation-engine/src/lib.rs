//! # vacation-engine
//!
//! Finds the paid-leave days that buy the longest continuous time off in a
//! calendar year.
//!
//! The engine builds the year's public-holiday table (fixed dates plus the
//! feasts that move with Orthodox Easter), groups weekends and holidays into
//! free blocks, then searches for short runs of leave that bridge or extend
//! those blocks. Candidates are deduplicated, ranked by total days off and
//! truncated to a top-N list.
//!
//! ## Modules
//!
//! - [`calendar`] — date arithmetic, `YYYY-MM-DD` keys, weekend/workday tests
//! - [`feast`] — Orthodox Easter and its dependent holidays
//! - [`holidays`] — year-scoped holiday tables
//! - [`blocks`] — contiguous runs of non-working days
//! - [`opportunity`] — gap bridging and chunk extension candidates
//! - [`rank`] — deduplication and best-first ordering
//! - [`plan`] — the whole pipeline for one year
//! - [`error`] — Error types

pub mod blocks;
pub mod calendar;
pub mod error;
pub mod feast;
pub mod holidays;
pub mod opportunity;
pub mod plan;
pub mod rank;

pub use blocks::{compute_free_blocks, FreeBlock};
pub use calendar::{
    add_days, all_days_in_year, date_key, is_weekend, validate_year, MAX_YEAR, MIN_YEAR,
};
pub use error::EngineError;
pub use feast::{orthodox_easter, MovableFeast};
pub use holidays::{compute_public_holidays, HolidayMap};
pub use opportunity::{compute_opportunities, Opportunity, OpportunityKind, OpportunityPolicy};
pub use plan::{plan_year, YearPlan};
pub use rank::rank_opportunities;
