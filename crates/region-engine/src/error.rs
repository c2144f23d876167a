//! Error types for region-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    /// Absolute-calendar fields (year/month/day) and ISO-week fields
    /// (year-for-week-of-year/week-of-year/weekday) were mixed in one spec.
    #[error("Invalid component combination: {0}")]
    InvalidComponentCombination(String),

    /// The calendar engine rejected the resolved fields, or the wall-clock
    /// instant does not exist under the region's timezone.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The timezone or locale name could not be resolved.
    #[error("Unresolvable region: {0}")]
    UnresolvableRegion(String),

    /// Formatting could not produce text.
    #[error("No result: {0}")]
    NoResult(String),
}

pub type Result<T> = std::result::Result<T, RegionError>;
