//! Error types for vacation-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid year {year}: expected a year between {min} and {max}")]
    InvalidYear { year: i32, min: i32, max: i32 },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
