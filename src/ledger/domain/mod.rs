//! Domain model for the completion ledger.

mod error;
mod filter;
mod ids;
mod record;

pub use error::LedgerDomainError;
pub use filter::{LedgerFilter, TimeRange};
pub use ids::RecordId;
pub use record::{
    CompletionRecord, CompletionTarget, PhotoRef, QualityScore, TargetKind, Verification,
};
