//! Error types for instant arithmetic and parsing.

use thiserror::Error;

/// Errors from instant arithmetic or UTC parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string is not a recognised UTC date or date-time.
    #[error("cannot parse UTC time {0:?} (expected YYYY-MM-DD, YYYY-MM-DDThh:mm:ssZ or RFC 3339)")]
    Parse(String),
    /// Offset is not finite or falls outside the representable range.
    #[error("instant offset out of representable range")]
    Overflow,
}
