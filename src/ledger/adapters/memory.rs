//! In-memory completion ledger for tests and embedding hosts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::OrgId;
use crate::ledger::{
    domain::{CompletionRecord, LedgerFilter, RecordId},
    ports::{CompletionLedger, LedgerRepositoryError, LedgerRepositoryResult},
};

/// Thread-safe in-memory completion ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletionLedger {
    state: Arc<RwLock<HashMap<RecordId, CompletionRecord>>>,
}

impl InMemoryCompletionLedger {
    /// Creates an empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rows in the ledger.
    ///
    /// Returns zero when the ledger state is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|state| state.len()).unwrap_or(0)
    }

    /// Returns `true` when the ledger holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(err: impl std::fmt::Display) -> LedgerRepositoryError {
    LedgerRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CompletionLedger for InMemoryCompletionLedger {
    async fn append(&self, record: &CompletionRecord) -> LedgerRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&record.id()) {
            return Err(LedgerRepositoryError::DuplicateRecord(record.id()));
        }
        state.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        organization_id: OrgId,
        id: RecordId,
    ) -> LedgerRepositoryResult<Option<CompletionRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|record| record.organization_id() == organization_id)
            .cloned())
    }

    async fn store_verification(&self, record: &CompletionRecord) -> LedgerRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .get(&record.id())
            .ok_or(LedgerRepositoryError::NotFound(record.id()))?;
        if stored.verification().is_some() {
            return Err(LedgerRepositoryError::AlreadyVerified(record.id()));
        }
        state.insert(record.id(), record.clone());
        Ok(())
    }

    async fn query(
        &self,
        organization_id: OrgId,
        filter: &LedgerFilter,
    ) -> LedgerRepositoryResult<Vec<CompletionRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut records: Vec<CompletionRecord> = state
            .values()
            .filter(|record| {
                record.organization_id() == organization_id && filter.matches(record)
            })
            .cloned()
            .collect();
        records.sort_by(|a, b| b.completed_at().cmp(&a.completed_at()));
        Ok(records)
    }
}
