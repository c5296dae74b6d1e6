//! Error types for ledger domain validation.

use super::RecordId;
use thiserror::Error;

/// Errors returned while constructing or mutating ledger domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerDomainError {
    /// The record has already been verified; verification is write-once.
    #[error("completion record {0} is already verified")]
    AlreadyVerified(RecordId),

    /// The recorded duration is negative.
    #[error("duration must not be negative, got {0} minutes")]
    NegativeDuration(i64),

    /// The quality score is outside the 1-5 range.
    #[error("quality score must be between 1 and 5, got {0}")]
    InvalidQualityScore(u8),

    /// The photo reference is empty.
    #[error("photo reference must not be empty")]
    EmptyPhotoRef,

    /// The time range end precedes its start.
    #[error("time range end must not precede its start")]
    InvertedTimeRange,
}
