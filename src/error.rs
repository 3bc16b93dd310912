//! Error types for u-dss.

use thiserror::Error;

/// Errors raised while building candidates, loading store rows, or
/// validating configuration.
///
/// The ranking functions themselves never fail: every invariant they rely
/// on is checked when a [`ProjectCandidate`](crate::project::ProjectCandidate)
/// is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DssError {
    /// A score field is outside its allowed range.
    #[error("{field} must be in {min}..={max}, got {value}")]
    ScoreOutOfRange {
        field: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    /// The supplied priority score disagrees with the weighted sum of its parts.
    #[error("priority_score {supplied} does not match weighted sum {computed}")]
    ScoreMismatch { supplied: i64, computed: u32 },

    /// Payment amount is negative, NaN, or infinite.
    #[error("payment_amount must be a finite non-negative number, got {0}")]
    InvalidPaymentAmount(f64),

    /// A required text field is missing from a store row.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A label could not be parsed into a level.
    #[error("unknown {kind} level `{label}`")]
    UnknownLevel { kind: &'static str, label: String },

    /// Invalid engine configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The project store could not be read.
    #[error("project store error: {0}")]
    Store(String),

    /// Store rows could not be decoded.
    #[error("malformed project rows: {0}")]
    Decode(String),
}

/// Result type alias for u-dss operations.
pub type Result<T> = std::result::Result<T, DssError>;
