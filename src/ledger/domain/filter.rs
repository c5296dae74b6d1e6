//! Query filter for ledger reporting collaborators.

use super::{CompletionRecord, LedgerDomainError, TargetKind};
use crate::identity::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive time window over `completed_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a validated time range.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerDomainError::InvertedTimeRange`] when `end` precedes
    /// `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, LedgerDomainError> {
        if end < start {
            return Err(LedgerDomainError::InvertedTimeRange);
        }
        Ok(Self { start, end })
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when the instant falls inside the window.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Filter for ledger queries.
///
/// Results are ordered by `completed_at` descending; the sequence is finite
/// and restartable by re-issuing the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFilter {
    target_kind: Option<TargetKind>,
    completed_by: Option<ActorId>,
    range: TimeRange,
}

impl LedgerFilter {
    /// Creates a filter covering the given time window.
    #[must_use]
    pub const fn for_range(range: TimeRange) -> Self {
        Self {
            target_kind: None,
            completed_by: None,
            range,
        }
    }

    /// Narrows the filter to one target kind.
    #[must_use]
    pub const fn with_target_kind(mut self, kind: TargetKind) -> Self {
        self.target_kind = Some(kind);
        self
    }

    /// Narrows the filter to one completing actor.
    #[must_use]
    pub const fn with_completed_by(mut self, actor_id: ActorId) -> Self {
        self.completed_by = Some(actor_id);
        self
    }

    /// Returns the time window.
    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    /// Returns `true` when the record satisfies every filter clause.
    #[must_use]
    pub fn matches(&self, record: &CompletionRecord) -> bool {
        if let Some(kind) = self.target_kind
            && record.target().kind() != kind
        {
            return false;
        }
        if let Some(actor_id) = self.completed_by
            && record.completed_by() != actor_id
        {
            return false;
        }
        self.range.contains(record.completed_at())
    }
}
