//! Repository port for the append-only completion ledger.

use crate::identity::OrgId;
use crate::ledger::domain::{CompletionRecord, LedgerFilter, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for ledger repository operations.
pub type LedgerRepositoryResult<T> = Result<T, LedgerRepositoryError>;

/// Completion ledger persistence contract.
///
/// Rows are append-only; storing a verification is the only permitted
/// mutation and must be conditional on the row not yet being verified.
#[async_trait]
pub trait CompletionLedger: Send + Sync {
    /// Appends a new completion record.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerRepositoryError::DuplicateRecord`] when the record ID
    /// already exists.
    async fn append(&self, record: &CompletionRecord) -> LedgerRepositoryResult<()>;

    /// Finds a record by identifier within an organization.
    ///
    /// Returns `None` when the record does not exist or belongs to a
    /// different organization.
    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: RecordId,
    ) -> LedgerRepositoryResult<Option<CompletionRecord>>;

    /// Persists a verification on an existing record.
    ///
    /// The write is conditional: it succeeds only while the stored row has
    /// no verification, so two racing verifiers cannot both win.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerRepositoryError::NotFound`] when the record does not
    /// exist and [`LedgerRepositoryError::AlreadyVerified`] when the stored
    /// row is already verified.
    async fn store_verification(&self, record: &CompletionRecord) -> LedgerRepositoryResult<()>;

    /// Returns records matching the filter, ordered by `completed_at`
    /// descending.
    async fn query(
        &self,
        organization_id: OrgId,
        filter: &LedgerFilter,
    ) -> LedgerRepositoryResult<Vec<CompletionRecord>>;
}

/// Errors returned by completion ledger implementations.
#[derive(Debug, Clone, Error)]
pub enum LedgerRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate completion record: {0}")]
    DuplicateRecord(RecordId),

    /// The record was not found.
    #[error("completion record not found: {0}")]
    NotFound(RecordId),

    /// The stored record is already verified.
    #[error("completion record {0} is already verified")]
    AlreadyVerified(RecordId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LedgerRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
