//! Service layer for recording, verifying, and querying completed work.

use crate::identity::{ActorContext, ActorId};
use crate::ledger::{
    domain::{
        CompletionRecord, CompletionTarget, LedgerDomainError, LedgerFilter, PhotoRef,
        QualityScore, RecordId,
    },
    ports::{CompletionLedger, LedgerRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request payload for recording completed work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompletion {
    target: CompletionTarget,
    duration_minutes: i64,
    notes: Option<String>,
    photo: Option<PhotoRef>,
    quality_score: Option<QualityScore>,
}

impl NewCompletion {
    /// Creates a request for the given work item and duration.
    #[must_use]
    pub const fn new(target: CompletionTarget, duration_minutes: i64) -> Self {
        Self {
            target,
            duration_minutes,
            notes: None,
            photo: None,
            quality_score: None,
        }
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches a photo evidence reference.
    #[must_use]
    pub fn with_photo(mut self, photo: PhotoRef) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Sets the quality score.
    #[must_use]
    pub const fn with_quality_score(mut self, score: QualityScore) -> Self {
        self.quality_score = Some(score);
        self
    }
}

/// Service-level errors for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] LedgerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] LedgerRepositoryError),
    /// The actor is not permitted to verify completions.
    #[error("actor {0} is not permitted to verify completions")]
    PermissionDenied(ActorId),
}

/// Result type for ledger service operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Completion ledger orchestration service.
#[derive(Clone)]
pub struct LedgerService<L, C>
where
    L: CompletionLedger,
    C: Clock + Send + Sync,
{
    ledger: Arc<L>,
    clock: Arc<C>,
}

impl<L, C> LedgerService<L, C>
where
    L: CompletionLedger,
    C: Clock + Send + Sync,
{
    /// Creates a new ledger service.
    #[must_use]
    pub const fn new(ledger: Arc<L>, clock: Arc<C>) -> Self {
        Self { ledger, clock }
    }

    /// Appends a completion record for work done by the calling actor.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Domain`] when validation fails or
    /// [`LedgerError::Repository`] when the append is rejected.
    pub async fn record(
        &self,
        ctx: &ActorContext,
        completion: NewCompletion,
    ) -> LedgerResult<CompletionRecord> {
        let mut record = CompletionRecord::new(
            ctx.organization_id,
            completion.target,
            ctx.actor_id,
            completion.duration_minutes,
            &*self.clock,
        )?;
        if let Some(notes) = completion.notes {
            record = record.with_notes(notes);
        }
        if let Some(photo) = completion.photo {
            record = record.with_photo(photo);
        }
        if let Some(score) = completion.quality_score {
            record = record.with_quality_score(score);
        }

        self.ledger.append(&record).await?;
        debug!(record_id = %record.id(), "completion recorded");
        Ok(record)
    }

    /// Verifies a completion record. Managers only; write-once.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PermissionDenied`] for non-managers,
    /// [`LedgerError::Domain`] with
    /// [`LedgerDomainError::AlreadyVerified`] for a second verification, or
    /// [`LedgerError::Repository`] when the record is missing or the
    /// conditional write loses a race.
    pub async fn verify(
        &self,
        ctx: &ActorContext,
        record_id: RecordId,
    ) -> LedgerResult<CompletionRecord> {
        if !ctx.is_manager() {
            warn!(actor_id = %ctx.actor_id, %record_id, "verification refused");
            return Err(LedgerError::PermissionDenied(ctx.actor_id));
        }

        let mut record = self
            .ledger
            .find_by_id(ctx.organization_id, record_id)
            .await?
            .ok_or(LedgerRepositoryError::NotFound(record_id))?;
        record.verify(ctx.actor_id, &*self.clock)?;
        self.ledger.store_verification(&record).await?;
        debug!(%record_id, "completion verified");
        Ok(record)
    }

    /// Queries completion records for reporting collaborators.
    ///
    /// Results are ordered by `completed_at` descending.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Repository`] when persistence lookup fails.
    pub async fn query(
        &self,
        ctx: &ActorContext,
        filter: &LedgerFilter,
    ) -> LedgerResult<Vec<CompletionRecord>> {
        Ok(self.ledger.query(ctx.organization_id, filter).await?)
    }
}
