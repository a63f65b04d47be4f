//! Error types for dasha calculations.

use chrono::{DateTime, Utc};
use dasha_time::TimeError;
use thiserror::Error;

/// Errors from dasha resolution.
///
/// All variants are input errors: they are returned to the caller as-is and
/// are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DashaError {
    /// Planet name not among the 9 grahas.
    #[error("invalid planet: {0:?}")]
    InvalidPlanet(String),
    /// Nakshatra name not among the 27 nakshatras.
    #[error("invalid nakshatra: {0:?}")]
    InvalidNakshatra(String),
    /// Reference instant falls outside the computable window `[start, end)`.
    #[error("reference {reference} outside computable window [{window_start}, {window_end})")]
    OutOfRange {
        reference: DateTime<Utc>,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    },
    /// Structurally invalid numeric input.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Instant arithmetic failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}
